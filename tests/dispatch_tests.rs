//! Value dispatch through the public API: equality, membership and text per category.

use std::ffi::CString;

use pretty::dispatch::{
    category_of, equal_scaled, parse_text, show, ComparisonPolicy, FormatPolicy, LongDouble,
    Opaque, OutputBuffer,
};
use pretty::{contains, equal, in_set, tostring, ValueCategory};

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_reflexive_in_every_category() {
        let handle = [0u8; 4];
        assert!(equal(&i64::MIN, &i64::MIN));
        assert!(equal(&0usize, &0usize));
        assert!(equal(&f32::MAX, &f32::MAX));
        assert!(equal(&f64::NEG_INFINITY, &f64::NEG_INFINITY));
        assert!(equal(&LongDouble(-3.25), &LongDouble(-3.25)));
        assert!(equal("", ""));
        assert!(equal(&false, &false));
        assert!(equal(&Opaque::of(&handle), &Opaque::of(&handle)));
    }

    #[test]
    fn test_epsilon_boundary_is_exclusive() {
        let eps = f64::EPSILON;
        assert!(equal(&0.5f64, &(0.5 + eps / 4.0)));
        assert!(!equal(&0.0f64, &eps));
        assert!(equal(&0.0f64, &(eps * 0.99)));
    }

    #[test]
    fn test_classic_float_sum() {
        assert!(equal(&(0.1f64 + 0.2), &0.3f64));
        assert!(equal(&(0.1f32 + 0.2), &0.3f32));
    }

    #[test]
    fn test_scaled_comparison_is_opt_in() {
        let a = 1.0e12f64;
        let b = a + 1.0e-4;
        assert!(!equal(&a, &b));
        assert!(equal_scaled(&a, &b));
        assert!(!equal_scaled(&1.0f32, &1.5f32));
    }

    #[test]
    fn test_strings_by_content_not_address() {
        let a = String::from("pretty");
        let b: String = ["pre", "tty"].concat();
        assert!(equal(&a, &b));
        let c = CString::new("pretty").expect("no interior nul");
        assert!(equal(&c, &a));
        assert!(equal(c.as_c_str(), "pretty"));
        assert!(!equal("pretty", "Pretty"));
    }

    #[test]
    fn test_integer_widths_mix_within_signedness() {
        assert!(equal(&200u8, &200u64));
        assert!(equal(&-5i16, &-5i128));
        assert!(!equal(&1u32, &2usize));
    }

    #[test]
    fn test_handles_compare_by_identity() {
        let a = vec![1, 2];
        let b = vec![1, 2];
        assert!(!equal(&Opaque::of(&a), &Opaque::of(&b)));
        let p = a.as_ptr();
        assert!(equal(&p, &a.as_ptr()));
    }
}

#[cfg(test)]
mod membership_tests {
    use super::*;

    #[test]
    fn test_contains_literal_set() {
        assert!(contains(&3, &[1, 2, 3, 4]));
        assert!(!contains(&9, &[1, 2, 3, 4]));
        assert!(in_set(&3, &[1, 2, 3, 4]));
    }

    #[test]
    fn test_contains_uses_category_policy() {
        assert!(contains(&0.3f64, &[0.1, 0.2, 0.1 + 0.2]));
        assert!(contains(&"b", &["a", "b"]));
        let owned = [String::from("x"), String::from("y")];
        assert!(contains("y", &owned));
    }

    #[test]
    fn test_contains_macro() {
        assert!(pretty::contains!('c'; 'a', 'b', 'c'));
        assert!(!pretty::contains!(false; true));
    }
}

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn test_tostring_round_trips() {
        for value in [0.1f32, 3.0, -2.5e-8, 1.0e20] {
            let back: f32 = tostring(&value).parse().expect("parses");
            assert!(equal(&back, &value), "{value}");
        }
        assert_eq!(tostring(&-17i8), "-17");
        assert_eq!(tostring(&u128::MAX), u128::MAX.to_string());
        assert_eq!(tostring(&true), "true");
    }

    #[test]
    fn test_byte_strings_round_trip_losslessly() {
        let raw = CString::new(vec![0x66, 0xff, 0x6f]).expect("no interior nul");
        let text = tostring(&raw);
        let back = CString::new(parse_text(&text).expect("parses")).expect("no interior nul");
        assert!(equal(&back, &raw));

        let a = CString::new(vec![0xff]).expect("no interior nul");
        let b = CString::new(vec![0xfe]).expect("no interior nul");
        assert!(!equal(&a, &b));
        assert_ne!(tostring(&a), tostring(&b));

        let path = String::from("C:\\temp\\x41");
        assert_eq!(parse_text(&tostring(&path)).as_deref(), Some(path.as_bytes()));
    }

    #[test]
    fn test_chars_print_their_code_point() {
        assert_eq!(tostring(&'A'), "65");
        assert_eq!(ValueCategory::UnsignedInteger.format(), FormatPolicy::Decimal);
    }

    #[test]
    fn test_tostring_returns_owned_text() {
        let mut text = tostring("borrowed");
        text.push('!');
        assert_eq!(text, "borrowed!");
    }

    #[test]
    fn test_show_emits_policy_text() {
        let mut out = OutputBuffer::new();
        show(&mut out, &42u16);
        show(&mut out, &LongDouble(0.5));
        show(&mut out, &String::from("end"));
        assert_eq!(out.as_str(), "42\n0.5\nend");
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_categories_come_from_types() {
        assert_eq!(category_of(&'x'), ValueCategory::UnsignedInteger);
        assert_eq!(category_of(&String::new()), ValueCategory::CString);
        assert_eq!(category_of(&Opaque::of("s")), ValueCategory::Opaque);
    }

    #[test]
    fn test_policies_per_category() {
        assert_eq!(
            ValueCategory::Float32.comparison(),
            ComparisonPolicy::EpsilonEqual(f32::EPSILON as f64)
        );
        assert_eq!(ValueCategory::CString.comparison(), ComparisonPolicy::ByteStringEqual);
        assert_eq!(ValueCategory::Boolean.format(), FormatPolicy::Keyword);
        assert_eq!(ValueCategory::Opaque.format(), FormatPolicy::Address);
    }
}
