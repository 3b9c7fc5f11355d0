//! Push/pop transform stack for hierarchical drawing.

use std::ops::Mul;

/// A stack of transforms scoped to a single draw.
///
/// The top of the stack is the current transform. [`MatrixStack::apply`]
/// post-composes onto it, [`MatrixStack::push`] saves it and
/// [`MatrixStack::pop`] restores the last saved value.
///
/// ```
/// use trueno_raster::math::{Mat3, MatrixStack};
///
/// let mut stack = MatrixStack::new(Mat3::identity());
/// stack.apply(Mat3::from_translation(0.5, 0.0));
/// stack.push();
/// stack.apply(Mat3::from_rotation(1.0));
/// stack.pop();
/// assert_eq!(stack.top(), Mat3::from_translation(0.5, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixStack<M> {
    current: M,
    saved: Vec<M>,
}

impl<M> MatrixStack<M>
where
    M: Copy + Mul<Output = M>,
{
    /// Create a stack whose current transform is `base`.
    #[must_use]
    pub fn new(base: M) -> Self {
        Self {
            current: base,
            saved: Vec::new(),
        }
    }

    /// Current transform.
    #[must_use]
    pub fn top(&self) -> M {
        self.current
    }

    /// Number of saved transforms.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Save the current transform.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last saved transform and return the one it replaced.
    ///
    /// Returns `None` and leaves the stack unchanged when nothing was pushed.
    pub fn pop(&mut self) -> Option<M> {
        let restored = self.saved.pop()?;
        Some(std::mem::replace(&mut self.current, restored))
    }

    /// Post-compose `m` onto the current transform (`top * m`).
    pub fn apply(&mut self, m: M) {
        self.current = self.current * m;
    }

    /// Replace the current transform.
    pub fn set(&mut self, m: M) {
        self.current = m;
    }

    /// Run `f` between a push and a pop.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let out = f(self);
        self.pop();
        out
    }
}

impl<M> Default for MatrixStack<M>
where
    M: Copy + Default + Mul<Output = M>,
{
    fn default() -> Self {
        Self::new(M::default())
    }
}
