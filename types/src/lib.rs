mod provider;
mod session;
mod user;

pub use provider::{Provider, ProviderStatus, RawProvider};
pub use session::{AdminSession, Role, SESSION_COOKIE_NAME, decode_session, encode_session};
pub use user::{RawUser, UserAccount};

pub type Result<T> = anyhow::Result<T>;

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

/// Build an error value without every crate importing `anyhow` directly.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::internal_anyhow_dont_use!($($arg)*)
    };
}
