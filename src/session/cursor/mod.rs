use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// Position within the playlist. Inactive whenever the playlist is empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cursor {
    Inactive,
    Active(usize),
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::Inactive
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Moved(usize),
    Stayed,
}

impl Cursor {
    /// Cursor for a freshly built or shuffled playlist.
    pub fn for_playlist(len: usize) -> Self {
        if len == 0 {
            Cursor::Inactive
        } else {
            Cursor::Active(0)
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Cursor::Inactive => None,
            Cursor::Active(index) => Some(*index),
        }
    }

    pub fn is_active(&self) -> bool {
        self.index().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self, Cursor::Active(index) if *index > 0)
    }

    pub fn can_advance(&self, len: usize) -> bool {
        matches!(self, Cursor::Active(index) if index + 1 < len)
    }

    pub fn advance(&mut self, len: usize) -> Step {
        match self {
            Cursor::Active(index) if *index + 1 < len => {
                *index += 1;
                Step::Moved(*index)
            }
            _ => Step::Stayed,
        }
    }

    pub fn retreat(&mut self) -> Step {
        match self {
            Cursor::Active(index) if *index > 0 => {
                *index -= 1;
                Step::Moved(*index)
            }
            _ => Step::Stayed,
        }
    }

    pub fn jump_to(&mut self, index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        *self = Cursor::Active(index);
        Ok(())
    }
}
