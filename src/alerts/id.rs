// ABOUTME: Identifier sources for rendered notifications

use uuid::Uuid;

/// Source of notification identifiers, injected into the renderer so hosts
/// and tests can substitute a deterministic generator.
///
/// Identifiers must be unique in practice across the notifications shown in
/// one session and safe for use as an element identifier: they must not start
/// with a digit. The `alert-` prefix guarantees both sources below satisfy
/// that.
pub trait AlertIdSource {
    fn next_id(&mut self) -> String;
}

/// Default source: a random UUID v4 rendered as hyphenated hex groups behind
/// the `alert-` prefix. Not cryptographically meaningful, only non-colliding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl AlertIdSource for RandomIdSource {
    fn next_id(&mut self) -> String {
        format!("alert-{}", Uuid::new_v4())
    }
}

/// Deterministic counter source for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertIdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        let n = self.next;
        self.next += 1;
        format!("alert-{n:08x}")
    }
}
