//! Chain layers.

/// Outcome of resolving one layer of a chain.
pub enum Step<N: Node> {
    /// The chain ends here.
    Terminal(N::Address),
    /// Keep resolving with the next layer.
    Forward(N),
}

impl<N: Node> Step<N> {
    /// Check whether this step ends the chain.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Terminal(_))
    }
}

/// One layer of an indirection chain.
///
/// Layers are consumed by [`step`](Node::step), so a forwarding layer may
/// hand back a freshly built value rather than something it shares. Chains
/// mixing several wrapper kinds model each kind as a variant of one node type.
pub trait Node: Sized {
    /// What a fully resolved chain points at, e.g. `&T` or `&mut T`.
    type Address;

    /// Resolve this layer once.
    fn step(self) -> Step<Self>;

    /// Stable identity of this layer, if it has one.
    ///
    /// Layers reporting the same identity twice within one resolution are
    /// treated as a cycle. The default reports none, leaving the step bound
    /// as the only guard.
    fn identity(&self) -> Option<usize> {
        None
    }
}
