//! Unit tests for the garden lifecycle.
