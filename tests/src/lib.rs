//! Behavioural tests that exercise `osiref-core` through its public API.

mod reference;
