//! Integration tests for resolving nested proxies.

use scoped_proxy::prelude::*;
use scoped_proxy::proxy::resolve;

struct Client {
    z: i32,
}

/// Points straight at the client.
struct Proxy1<'c> {
    target: &'c mut Client,
}

/// Points at another proxy.
struct Proxy2<'p, 'c> {
    target: &'p mut Proxy1<'c>,
}

/// The two wrapper kinds as one node type.
enum Layer<'a, 'p, 'c> {
    Outer(&'a mut Proxy2<'p, 'c>),
    Inner(&'a mut Proxy1<'c>),
}

impl<'a, 'p, 'c> Node for Layer<'a, 'p, 'c> {
    type Address = &'a mut Client;

    fn step(self) -> Step<Self> {
        match self {
            Layer::Outer(p2) => Step::Forward(Layer::Inner(&mut *p2.target)),
            Layer::Inner(p1) => Step::Terminal(&mut *p1.target),
        }
    }
}

#[test]
fn test_write_through_two_proxies() {
    let mut x = Client { z: 3 };
    let mut y = Proxy1 { target: &mut x };
    let mut y2 = Proxy2 { target: &mut y };

    let chain = IndirectionChain::new();
    let resolved = chain.resolve(Layer::Outer(&mut y2)).unwrap();
    assert_eq!(resolved.steps, 2);
    resolved.address.z = 42;

    let through_inner = chain.access(Layer::Inner(&mut y), |c| c.z).unwrap();
    assert_eq!(through_inner, 42);
    assert_eq!(x.z, 42);
}

/// A read-only chain of `depth` wrapper layers over a shared value.
#[derive(Clone, Copy)]
struct Nested<'a> {
    depth: usize,
    value: &'a i32,
}

impl<'a> Node for Nested<'a> {
    type Address = &'a i32;

    fn step(self) -> Step<Self> {
        if self.depth == 0 {
            Step::Terminal(self.value)
        } else {
            Step::Forward(Nested { depth: self.depth - 1, ..self })
        }
    }
}

#[test]
fn test_chain_termination() {
    let value = 5;
    for n in [0usize, 1, 2, 5] {
        let resolved = IndirectionChain::new()
            .resolve(Nested { depth: n, value: &value })
            .unwrap();
        assert_eq!(resolved.steps, n + 1, "depth {n}");
        assert_eq!(*resolved.address, 5);
    }
}

#[test]
fn test_chain_at_default_bound() {
    let value = 1;
    assert!(resolve(Nested { depth: 64, value: &value }).is_ok());
    let err = resolve(Nested { depth: 65, value: &value }).unwrap_err();
    assert!(matches!(
        err,
        Error::ProxyChainOverflow { limit: 64, reason: OverflowReason::DepthLimit, .. }
    ));
}

/// Graph walk where each node knows its index.
struct Hop<'g> {
    at: usize,
    next: &'g [Option<usize>],
}

impl<'g> Node for Hop<'g> {
    type Address = usize;

    fn step(self) -> Step<Self> {
        match self.next[self.at] {
            Some(n) => Step::Forward(Hop { at: n, next: self.next }),
            None => Step::Terminal(self.at),
        }
    }

    fn identity(&self) -> Option<usize> {
        Some(self.at)
    }
}

#[test]
fn test_cycle_detected() {
    // 0 -> 1 -> 2 -> 1
    let graph = [Some(1), Some(2), Some(1)];
    let err = IndirectionChain::new()
        .resolve(Hop { at: 0, next: &graph })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ProxyChainOverflow { reason: OverflowReason::Revisited, .. }
    ));
    assert!(err.is_contract_violation());
}

#[test]
fn test_leaves_in_boxes() {
    let mut leaf = ScopedBox::new(Client { z: 7 });
    let client = leaf.access_mut().unwrap();
    let mut inner = Proxy1 { target: client };
    let mut outer = Proxy2 { target: &mut inner };
    IndirectionChain::new()
        .access(Layer::Outer(&mut outer), |c| c.z += 1)
        .unwrap();
    assert_eq!(leaf.access().unwrap().z, 8);
}

/// Innermost layer: resolves to itself.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Inner {
    x: i32,
}

/// Outer layer: hands its `Inner` out by value.
#[derive(Clone, Copy)]
struct Wrapper {
    inner: Inner,
}

enum Drill {
    Wrap(Wrapper),
    In(Inner),
}

impl Node for Drill {
    type Address = Inner;

    fn step(self) -> Step<Self> {
        match self {
            Drill::Wrap(w) => Step::Forward(Drill::In(w.inner)),
            Drill::In(inner) => Step::Terminal(inner),
        }
    }
}

/// Borrowed variant: the innermost layer's terminal is `&Self`.
enum DrillRef<'a> {
    Wrap(&'a Wrapper),
    In(&'a Inner),
}

impl<'a> Node for DrillRef<'a> {
    type Address = &'a Inner;

    fn step(self) -> Step<Self> {
        match self {
            DrillRef::Wrap(w) => Step::Forward(DrillRef::In(&w.inner)),
            DrillRef::In(inner) => Step::Terminal(inner),
        }
    }
}

#[test]
fn test_layer_returned_by_value_is_its_own_terminal() {
    let wrapper = Wrapper { inner: Inner { x: 11 } };
    let chain = IndirectionChain::new();

    let by_value = chain.resolve(Drill::Wrap(wrapper)).unwrap();
    assert_eq!(by_value, Resolved { address: Inner { x: 11 }, steps: 2 });

    let direct = chain.resolve(Drill::In(Inner { x: 4 })).unwrap();
    assert_eq!(direct.steps, 1);
    assert_eq!(direct.address.x, 4);

    let by_ref = chain.resolve(DrillRef::Wrap(&wrapper)).unwrap();
    assert_eq!(by_ref.steps, 2);
    assert!(std::ptr::eq(by_ref.address, &wrapper.inner));
    assert_eq!(chain.access(DrillRef::Wrap(&wrapper), |i| i.x), Ok(11));
}
