use log::{debug, trace};
use tagbalance_types::{Diagnostic, OpenTag, TagEvent, TagKind, TagSets};

/// Stack-based balance checker.
///
/// Events are folded in order over a stack of pending open tags. Recovery
/// is greedy: a mismatched close consumes exactly the top entry and never
/// searches deeper in the stack to resynchronise.
pub struct Validator<'a> {
    sets: &'a TagSets,
    stack: Vec<OpenTag>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Validator<'a> {
    pub fn new(sets: &'a TagSets) -> Self {
        Self {
            sets,
            stack: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Apply a single event to the stack.
    pub fn feed(&mut self, event: &TagEvent) {
        match event.kind {
            TagKind::Open => self.on_open(event),
            TagKind::Close => self.on_close(event),
        }
    }

    fn on_open(&mut self, event: &TagEvent) {
        // Self-closing wins over tracked
        if self.sets.is_self_closing(&event.name) {
            trace!("skip self-closing {}", event);
            return;
        }
        if self.sets.is_tracked(&event.name) {
            trace!("push {}", event);
            self.stack.push(OpenTag::from(event));
        }
    }

    fn on_close(&mut self, event: &TagEvent) {
        if !self.sets.is_tracked(&event.name) {
            return;
        }

        let Some(top) = self.stack.pop() else {
            debug!("unexpected {} with empty stack", event);
            self.diagnostics.push(Diagnostic::UnexpectedClose {
                tag: event.name.clone(),
                line: event.line,
            });
            return;
        };

        if top.name == event.name {
            trace!("pop {}", event);
            return;
        }

        debug!(
            "mismatch: {} closes <{}> opened at line {}",
            event, top.name, top.line
        );
        self.diagnostics.push(Diagnostic::Mismatch {
            expected_tag: top.name,
            expected_open_line: top.line,
            got_tag: event.name.clone(),
            got_line: event.line,
        });
    }

    /// Open tags still waiting for a close, bottom of the stack first.
    pub fn pending(&self) -> &[OpenTag] {
        &self.stack
    }

    /// Diagnostics emitted so far, excluding end-of-input unclosed tags.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Finish the fold and report every tag left open, outermost first.
    pub fn finish(self) -> Vec<Diagnostic> {
        let Validator {
            stack,
            mut diagnostics,
            ..
        } = self;

        if !stack.is_empty() {
            debug!("{} tag(s) left open at end of input", stack.len());
        }

        diagnostics.extend(
            stack
                .into_iter()
                .map(|open| Diagnostic::Unclosed {
                    tag: open.name,
                    line: open.line,
                }),
        );
        diagnostics
    }
}

/// Fold all events and return diagnostics in discovery order.
pub fn validate(events: &[TagEvent], sets: &TagSets) -> Vec<Diagnostic> {
    let mut validator = Validator::new(sets);
    for event in events {
        validator.feed(event);
    }
    validator.finish()
}
