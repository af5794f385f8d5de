/// A hook called by every search kernel after it evaluates the function.
///
/// Each call gets the kernel's latest event (the iterate, its value and the
/// current bracket or slope). Returning `Some(action)` asks the kernel to act
/// on it, such as stopping with the best estimate so far, and `None` lets the
/// search carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, so ad hoc logging or
/// stopping rules need no new type. Pass `()` to observe nothing.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: usize) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        (0..events).filter_map(|e| observer.observe(&e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), 5).is_empty());
    }

    #[test]
    fn closure_observer_can_act_and_keep_state() {
        let mut seen = 0;
        let actions = drive(
            |event: &usize| {
                seen += 1;
                (*event == 3).then_some("stop")
            },
            5,
        );
        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, 5);
    }
}
