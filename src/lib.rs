pub use crate::dispatch::{contains, equal, in_set, tostring, ValueCategory};
pub use crate::errors::{print_error, ErrorContext, PrettyError, Span};
pub use crate::guard::{with, Defer, ScopeGuard};
pub use crate::iter::{foreach, foreach_mut, forrange, forrange_by, forthese, fortimes};
pub use crate::signal::{attempt, ErrorCode, Outcome, Signal};

pub mod cli;
pub mod dispatch;
pub mod errors;
pub mod guard;
pub mod iter;
pub mod signal;
