//! Execution environment passed to the resolvers.

/// Whether the resolver is running inside a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentKind {
    #[default]
    Runtime,
    Test,
}

impl EnvironmentKind {
    pub fn is_test(self) -> bool {
        self == EnvironmentKind::Test
    }
}
