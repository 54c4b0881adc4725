use apotekhjelper::errors::AppError;
use apotekhjelper::session::Session;

#[test]
fn test_login_with_right_password() {
    let mut s = Session::new();
    assert!(!s.is_authenticated());
    assert!(matches!(s.require_login(), Err(AppError::NotAuthenticated)));

    s.login("hemmelig", "hemmelig").unwrap();
    assert!(s.is_authenticated());
    s.require_login().unwrap();
}

#[test]
fn test_wrong_password_leaves_state_unchanged() {
    let mut s = Session::new();
    assert!(matches!(s.login("feil", "hemmelig"), Err(AppError::AuthFailed)));
    assert!(!s.is_authenticated());

    s.login("hemmelig", "hemmelig").unwrap();
    assert!(matches!(s.login("feil", "hemmelig"), Err(AppError::AuthFailed)));
    assert!(s.is_authenticated(), "a failed retry does not log out");
}

#[test]
fn test_empty_secret_never_logs_in() {
    let mut s = Session::new();
    assert!(matches!(s.login("", ""), Err(AppError::NoPasswordConfigured)));
    assert!(!s.is_authenticated());
}

#[test]
fn test_logout() {
    let mut s = Session::new();
    s.login("pw", "pw").unwrap();
    s.logout();
    assert!(!s.is_authenticated());
}
