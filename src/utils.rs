use axum_extra::extract::cookie::{Cookie, SameSite};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &'static str, value: &str, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value.to_owned());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(secure);
    cookie
}
