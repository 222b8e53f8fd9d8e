//! End-to-end behavior tests driving the widget through its public event
//! API, the way a host would.

mod properties;
