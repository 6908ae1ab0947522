/// Receives the forced navigation that follows a terminal 401.
///
/// Closures implement this directly, which is how most embedders and tests
/// plug in:
///
/// ```
/// use flexirota::auth::Navigator;
///
/// let nav = |path: &str| println!("go to {path}");
/// nav.redirect("/sign-in");
/// ```
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn redirect(&self, path: &str) {
        self(path)
    }
}

/// Navigator that only records the redirect in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, path: &str) {
        tracing::warn!(path, "Session ended; sign-in required");
    }
}
