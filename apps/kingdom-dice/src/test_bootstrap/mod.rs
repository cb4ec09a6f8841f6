//! Test-only bootstrap helpers.
