use crate::parsers::MarkupEvent;
use crate::results::ParsedLink;

const ANCHOR_TAG: &str = "a";
const HREF_ATTR: &str = "href";

/// Where the extractor is relative to the first anchor element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No anchor tag has been seen yet
    #[default]
    NotYetCaptured,
    /// Inside the first anchor; text is being captured
    Capturing,
    /// The first anchor has been left; every further event is ignored
    Done,
}

/// Reduces a stream of markup events to the first anchor's href and text.
///
/// Every anchor tag, opening or closing, advances the state by one step.
/// Capture is therefore only active strictly between the first anchor tag
/// and the next one, whichever kind that is. A nested `<a>` ends capture
/// just like `</a>` does, and a stray `</a>` before any anchor starts it.
#[derive(Debug, Clone, Default)]
pub struct AnchorExtractor {
    state: CaptureState,
    url: String,
    text: String,
}

impl AnchorExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Apply one event and return the updated extractor
    pub fn step(mut self, event: &MarkupEvent) -> Self {
        match (self.state, event) {
            (CaptureState::Done, _) => {}
            (state, MarkupEvent::StartTag { name, attrs }) if is_anchor(name) => {
                self.state = advance(state);
                if state == CaptureState::NotYetCaptured {
                    if let Some((_, href)) = attrs.iter().find(|(attr, _)| attr == HREF_ATTR) {
                        self.url = href.clone();
                    }
                }
            }
            (state, MarkupEvent::EndTag { name }) if is_anchor(name) => {
                self.state = advance(state);
            }
            (CaptureState::Capturing, MarkupEvent::Text(data)) => {
                self.text = data.clone();
            }
            _ => {}
        }
        self
    }

    /// Consume the extractor and build the result
    pub fn finish(self) -> ParsedLink {
        ParsedLink::new(self.url, self.text)
    }

    /// Fold a whole event sequence into a result
    pub fn extract<'a, I>(events: I) -> ParsedLink
    where
        I: IntoIterator<Item = &'a MarkupEvent>,
    {
        events
            .into_iter()
            .fold(Self::new(), Self::step)
            .finish()
    }
}

fn is_anchor(name: &str) -> bool {
    name.eq_ignore_ascii_case(ANCHOR_TAG)
}

fn advance(state: CaptureState) -> CaptureState {
    match state {
        CaptureState::NotYetCaptured => CaptureState::Capturing,
        CaptureState::Capturing | CaptureState::Done => CaptureState::Done,
    }
}
