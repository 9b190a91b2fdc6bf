// Global subscriber installation.
//
// Kept in its own test binary: `init` installs a process-wide subscriber,
// which would shadow the capture layer used by the other logging tests.

use homefit_core::logging_facility::{init, Profile};

#[test]
fn test_init_is_idempotent_across_profiles() {
    init(Profile::Test);
    init(Profile::Test);
    init(Profile::Development);
    init(Profile::Production);

    // Events after init go to whichever subscriber won; none of this panics
    tracing::info!(op = "init_test", "after init");
}
