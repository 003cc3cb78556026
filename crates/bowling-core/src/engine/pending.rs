use crate::config::pins::RACK_SIZE;

/// Rolls a strike waits on before its frame can be scored
const STRIKE_BONUS_ROLLS: u8 = 2;

/// A strike whose bonus rolls have not all been bowled yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStrike {
    /// 0-based index of the frame the strike was bowled in
    pub frame: usize,
    bonus: u32,
    rolls_needed: u8,
}

impl PendingStrike {
    pub fn new(frame: usize) -> Self {
        Self {
            frame,
            bonus: 0,
            rolls_needed: STRIKE_BONUS_ROLLS,
        }
    }

    /// Pins collected from bonus rolls so far
    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    pub fn rolls_needed(&self) -> u8 {
        self.rolls_needed
    }

    /// Frame score once every bonus roll is in
    pub fn score(&self) -> u32 {
        u32::from(RACK_SIZE) + self.bonus
    }
}

/// A frame whose score became final
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub frame: usize,
    pub score: u32,
}

/// Last-in-first-out stack of outstanding strikes.
///
/// At most two strikes can be outstanding at once in a valid game: the
/// older one waiting on one roll, the newer one on two.
#[derive(Debug, Clone, Default)]
pub struct PendingStrikes {
    stack: Vec<PendingStrike>,
}

impl PendingStrikes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: usize) {
        self.stack.push(PendingStrike::new(frame));
    }

    pub fn pop(&mut self) -> Option<PendingStrike> {
        self.stack.pop()
    }

    /// Most recent outstanding strike
    pub fn peek(&self) -> Option<&PendingStrike> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Outstanding strikes, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PendingStrike> {
        self.stack.iter()
    }

    /// Credit one roll to every outstanding strike, most recent first.
    ///
    /// Returns the strikes this roll completed, most recent first. Strikes
    /// still waiting keep their original stack order.
    pub fn credit(&mut self, pins: u8) -> Vec<Resolved> {
        let mut waiting = Vec::with_capacity(self.stack.len());
        let mut resolved = Vec::new();

        while let Some(mut strike) = self.stack.pop() {
            strike.bonus += u32::from(pins);
            strike.rolls_needed -= 1;
            if strike.rolls_needed == 0 {
                resolved.push(Resolved {
                    frame: strike.frame,
                    score: strike.score(),
                });
            } else {
                waiting.push(strike);
            }
        }

        while let Some(strike) = waiting.pop() {
            self.stack.push(strike);
        }

        resolved
    }
}
