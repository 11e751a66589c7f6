/// Host-side signup abuse checks (spam lists, abuse heuristics) whose
/// findings are reported next to a diagnosis. They never change whether the
/// address is valid.
pub trait SignupChecker {
    /// Human-readable findings for `email`; empty when nothing was flagged.
    fn check_signup(&self, email: &str) -> Vec<String>;
}

impl<T: SignupChecker + ?Sized> SignupChecker for &T {
    fn check_signup(&self, email: &str) -> Vec<String> {
        (**self).check_signup(email)
    }
}

impl<T: SignupChecker + ?Sized> SignupChecker for Box<T> {
    fn check_signup(&self, email: &str) -> Vec<String> {
        (**self).check_signup(email)
    }
}

/// Every checker runs, findings concatenated in order.
impl<T: SignupChecker> SignupChecker for [T] {
    fn check_signup(&self, email: &str) -> Vec<String> {
        self.iter()
            .flat_map(|checker| checker.check_signup(email))
            .collect()
    }
}

/// No signup checks installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSignupChecks;

impl SignupChecker for NoSignupChecks {
    fn check_signup(&self, _email: &str) -> Vec<String> {
        Vec::new()
    }
}
