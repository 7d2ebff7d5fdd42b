fn main() {
    pretty::cli::run();
}
