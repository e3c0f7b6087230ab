//! Integration tests for typing into widgets through the input router.

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use malena::{
        CharacterInput, EventOutcome, FocusState, InputRouter, Text, Typer, WrapConfig,
        testing::FixedMetrics, wrap,
    };
    use pretty_assertions::assert_eq;

    fn send(router: &mut InputRouter, s: &str) {
        for c in s.chars() {
            router.dispatch(c.into());
        }
    }

    #[test]
    fn hello_without_wrap() {
        let typer = Rc::new(RefCell::new(Typer::new()));
        typer.borrow_mut().set_focus(FocusState::Focused);
        let mut router = InputRouter::new();
        router.register(&typer);

        send(&mut router, "HELLO");
        assert_eq!(typer.borrow().render_text(), "HELLO");
    }

    #[test]
    fn backspace_scenario() {
        let typer = Rc::new(RefCell::new(Typer::new()));
        typer.borrow_mut().set_focus(FocusState::Focused);
        let mut router = InputRouter::new();
        router.register(&typer);

        send(&mut router, "HE\u{8}");
        assert_eq!(typer.borrow().value(), "H");
    }

    #[test]
    fn unfocused_scenario() {
        let typer = Rc::new(RefCell::new(Typer::new()));
        typer.borrow_mut().set_value("before");
        let mut router = InputRouter::new();
        router.register(&typer);

        assert_eq!(router.dispatch('X'.into()), EventOutcome::Ignore);
        assert_eq!(typer.borrow().value(), "before");
    }

    #[test]
    fn focus_moves_between_typers() {
        let name = Rc::new(RefCell::new(Typer::new()));
        let email = Rc::new(RefCell::new(Typer::new()));
        let mut router = InputRouter::new();
        router.register(&name);
        router.register(&email);

        name.borrow_mut().set_focus(FocusState::Focused);
        send(&mut router, "ada");
        name.borrow_mut().set_focus(FocusState::Unfocused);
        email.borrow_mut().set_focus(FocusState::Focused);
        send(&mut router, "ada@example.com");

        assert_eq!(name.borrow().value(), "ada");
        assert_eq!(email.borrow().value(), "ada@example.com");
    }

    #[test]
    fn dropped_typer_stops_receiving() {
        let mut router = InputRouter::new();
        {
            let typer = Rc::new(RefCell::new(Typer::new()));
            typer.borrow_mut().set_focus(FocusState::Focused);
            router.register(&typer);
            send(&mut router, "hi");
            assert_eq!(typer.borrow().value(), "hi");
        }
        assert_eq!(router.dispatch('x'.into()), EventOutcome::Ignore);
        assert!(router.is_empty());
    }

    #[test]
    fn wrapped_typing() {
        let metrics = Rc::new(FixedMetrics::new(1.0));
        let max = wrap::measure("cat dog", &*metrics);
        let text = Text::new()
            .with_metrics(&metrics)
            .with_config(WrapConfig::wrapped(max));
        let typer = Rc::new(RefCell::new(Typer::with_text(text)));
        typer.borrow_mut().set_focus(FocusState::Focused);
        let mut router = InputRouter::new();
        router.register(&typer);

        send(&mut router, "cat dog fox");
        let t = typer.borrow();
        assert_eq!(
            t.render_text().split('\n').collect::<Vec<_>>(),
            vec!["cat dog", "fox"]
        );
        assert_eq!(t.value(), "cat dog fox");
        assert_eq!(t.text().line_count(), 2);
    }

    #[test]
    fn invalid_code_points_are_dropped() {
        let typer = Rc::new(RefCell::new(Typer::new()));
        typer.borrow_mut().set_focus(FocusState::Focused);
        let mut router = InputRouter::new();
        router.register(&typer);

        assert_eq!(
            router.dispatch(CharacterInput::new(0xD800)),
            EventOutcome::Ignore
        );
        assert_eq!(typer.borrow().value(), "");
    }
}
