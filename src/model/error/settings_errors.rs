#[derive(PartialEq, Debug)]
pub enum SetPasscodeError {
    /// passcodes must be exactly 6 digits
    InvalidFormat,
    /// a passcode already exists and the current one passed with the request does not match it
    CurrentPasscodeMismatch,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateSettingsError {
    DbError,
}
