//! Shared test utilities for crew-db integration tests.
