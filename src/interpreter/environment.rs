use std::collections::HashMap;

/// One scope: name bindings plus the index of the frame it was pushed from.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub bindings: HashMap<String, i64>,
    pub parent: Option<usize>,
}

/// The frame chain, stored as an arena indexed by position.
///
/// Frame `0` is the global frame and lives as long as the environment. Call
/// frames are pushed on top with `parent` pointing at the caller's current
/// frame, and popped in strict stack order.
#[derive(Debug, Clone)]
pub struct Environment {
    frames: Vec<Frame>,
    current: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::default()],
            current: 0,
        }
    }

    /// Index of the innermost frame on the chain that binds `name`.
    pub fn find_binding(&self, name: &str) -> Option<usize> {
        let mut index = Some(self.current);

        while let Some(i) = index {
            let frame = &self.frames[i];
            if frame.bindings.contains_key(name) {
                return Some(i);
            }
            index = frame.parent;
        }

        None
    }

    /// Value of `name`, searching from the current frame outward.
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.find_binding(name)
            .and_then(|i| self.frames[i].bindings.get(name).copied())
    }

    /// Updates the frame that already binds `name`, or binds it in the current frame.
    pub fn assign(&mut self, name: &str, value: i64) {
        let index = self.find_binding(name).unwrap_or(self.current);

        self.frames[index].bindings.insert(name.to_string(), value);
    }

    /// Pushes a frame whose parent is the current frame and makes it current.
    ///
    /// Returns the caller's frame index, to be handed back to [`Environment::pop_frame`].
    pub fn push_frame(&mut self, bindings: HashMap<String, i64>) -> usize {
        let caller = self.current;

        self.frames.push(Frame {
            bindings,
            parent: Some(caller),
        });
        self.current = self.frames.len() - 1;

        tracing::trace!(depth = self.depth(), "pushed frame");

        caller
    }

    /// Discards the innermost frame and makes `caller` current again.
    pub fn pop_frame(&mut self, caller: usize) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        self.current = caller;

        tracing::trace!(depth = self.depth(), "popped frame");
    }

    /// Number of call frames above the global frame.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Value of `name` in the global frame only.
    pub fn global(&self, name: &str) -> Option<i64> {
        self.frames[0].bindings.get(name).copied()
    }

    /// Binds `name` directly in the global frame.
    pub fn define_global(&mut self, name: &str, value: i64) {
        self.frames[0].bindings.insert(name.to_string(), value);
    }

    pub fn current_bindings(&self) -> &HashMap<String, i64> {
        &self.frames[self.current].bindings
    }
}
