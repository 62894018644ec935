//! Engine tests, sync and async.
