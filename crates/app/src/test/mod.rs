//! Shared fixtures for tests that need a real `PostgreSQL` server.


pub(crate) use context::TestContext;
