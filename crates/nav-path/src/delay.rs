//! Delay costing for transport edges.
//!
//! The frontier is FIFO, so a transport's cost is expressed as *queue
//! depth*: its destination is inserted far enough behind the current
//! frontier to approximate how many walking steps the transport is worth.
//! The formula is all-integer for determinism:
//!
//! ```text
//! increment = 6 * (1 + transports_seen)
//! delay     = queue_len * duration + increment * duration * (duration + 1) / 2
//! ```
//!
//! The `queue_len` term scales with the current frontier (a deep frontier
//! means each position is cheap, so a fixed duration must push deeper);
//! the quadratic term penalizes long connectors more than short ones; and
//! the escalating multiplier makes every additional transport the search
//! touches a little less attractive, discouraging chains of
//! transport-hopping from dominating a route that should mostly be walked.
//! This is a deliberate approximation of a weighted search, not an exact
//! cost model.

/// Compute how many effective queue positions to push a transport
/// destination behind the frontier.
///
/// Zero-duration transports are instantaneous (delay 0).  The arithmetic
/// runs in `u64` and saturates to `u32::MAX` instead of wrapping.
#[inline]
pub fn transport_delay(duration: u32, queue_len: usize, transports_seen: u32) -> u32 {
    if duration == 0 {
        return 0;
    }
    let d = duration as u64;
    let increment = 6 * (1 + transports_seen as u64);
    // d * (d + 1) stays inside u64 even at d = u32::MAX; the surrounding
    // products can overflow, so they saturate.
    let quadratic = increment.saturating_mul(d * (d + 1) / 2);
    let total = (queue_len as u64).saturating_mul(d).saturating_add(quadratic);
    total.min(u32::MAX as u64) as u32
}
