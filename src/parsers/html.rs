use crate::parsers::MarkupEvent;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::RefCell;

/// Collects tokenizer output as a flat list of markup events
#[derive(Default)]
struct EventSink {
    events: RefCell<Vec<MarkupEvent>>,
    // Character tokens arrive split at newlines, `&` and NUL; they are
    // joined here until the next piece of markup.
    pending_text: RefCell<String>,
}

impl EventSink {
    fn flush_text(&self) {
        let mut pending = self.pending_text.borrow_mut();
        if !pending.is_empty() {
            let text = std::mem::take(&mut *pending);
            self.events.borrow_mut().push(MarkupEvent::Text(text));
        }
    }

    fn push_tag(&self, tag: Tag) {
        let name = tag.name.to_string();
        let mut events = self.events.borrow_mut();
        match tag.kind {
            TagKind::StartTag => {
                let attrs = tag
                    .attrs
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                events.push(MarkupEvent::StartTag {
                    name: name.clone(),
                    attrs,
                });
                if tag.self_closing {
                    events.push(MarkupEvent::EndTag { name });
                }
            }
            TagKind::EndTag => events.push(MarkupEvent::EndTag { name }),
        }
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chars) => self.pending_text.borrow_mut().push_str(&chars),
            Token::NullCharacterToken => self.pending_text.borrow_mut().push('\0'),
            Token::TagToken(tag) => {
                self.flush_text();
                self.push_tag(tag);
            }
            Token::ParseError(message) => {
                ::log::trace!("Tokenizer reported: {}", message);
            }
            // Comments, doctypes and end of input all close a text run
            _ => self.flush_text(),
        }
        TokenSinkResult::Continue
    }

    fn end(&self) {
        self.flush_text();
    }
}

/// Tokenizes an HTML fragment into start tag, end tag and text events in
/// document order.
///
/// No tree builder is involved, so stray or nested tags are reported exactly
/// as written. Tag and attribute names come back lower-cased and character
/// references are decoded.
pub fn tokenize(markup: &str) -> Vec<MarkupEvent> {
    let tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(markup));

    // The sink never asks the tokenizer to suspend, so one feed drains the queue
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.flush_text();
    let events = tokenizer.sink.events.take();
    ::log::trace!("Tokenized {} bytes into {} events", markup.len(), events.len());
    events
}
