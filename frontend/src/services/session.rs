/// The logged-in caller's identity, held at the application root and passed
/// down explicitly instead of being read from ambient browser storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub is_admin: bool,
}
