//! Visible-text extraction from an HTML token stream
//!
//! The extractor keys suppression off the most recent start tag only. Text
//! that follows `<script>`, `<noscript>` or `<style>` is dropped until another
//! start tag is seen, even if the element was already closed. End tags and
//! self-closing tags do not reset that state.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Start tags whose text is never part of the page's visible content
const SUPPRESSED_TAGS: &[&str] = &["script", "noscript", "style"];

/// One lexical unit of an HTML document, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageToken {
    /// `<name ...>`
    StartTag(String),
    /// `</name>`
    EndTag(String),
    /// `<name ... />`
    SelfClosingTag(String),
    /// A run of character data between two tags, entities already decoded
    Text(String),
    /// End of the document; nothing after it is read
    EndOfStream,
}

/// Splits an HTML document into tokens
///
/// Character data between two tags is merged into a single `Text` token.
/// Comments and doctypes are dropped. The last token is always `EndOfStream`.
pub fn tokenize(html: &str) -> Vec<PageToken> {
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(TokenCollector::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut queue);
    tokenizer.end();

    tokenizer.sink.tokens
}

/// Extracts the visible text from a token stream
///
/// Each kept text run is trimmed and followed by a newline; runs that trim to
/// nothing are skipped.
///
/// # Examples
///
/// ```
/// use krawler::crawler::{extract_text, tokenize};
///
/// let text = extract_text(tokenize("<script>ignored</script><p>kept</p>"));
/// assert_eq!(text, "kept\n");
/// ```
pub fn extract_text<I>(tokens: I) -> String
where
    I: IntoIterator<Item = PageToken>,
{
    let mut last_start_tag: Option<String> = None;
    let mut content = String::new();

    for token in tokens {
        match token {
            PageToken::EndOfStream => break,
            PageToken::StartTag(name) => last_start_tag = Some(name),
            PageToken::Text(text) => {
                if last_start_tag.as_deref().map_or(false, is_suppressed) {
                    continue;
                }

                let text = text.trim();
                if !text.is_empty() {
                    content.push_str(text);
                    content.push('\n');
                }
            }
            PageToken::EndTag(_) | PageToken::SelfClosingTag(_) => {}
        }
    }

    content
}

fn is_suppressed(tag: &str) -> bool {
    SUPPRESSED_TAGS.contains(&tag)
}

/// Raw-text handling for tags whose content is not markup
///
/// Without a tree builder the tokenizer has to be told when to stop looking
/// for tags, or `if (a < b)` inside a script turns into a start tag.
fn raw_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
            Some(RawKind::Rawtext)
        }
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

#[derive(Default)]
struct TokenCollector {
    tokens: Vec<PageToken>,
    text: String,
}

impl TokenCollector {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens
                .push(PageToken::Text(std::mem::take(&mut self.text)));
        }
    }
}

impl TokenSink for TokenCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chars) => self.text.push_str(&chars),
            Token::TagToken(tag) => {
                self.flush_text();
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag if tag.self_closing => {
                        self.tokens.push(PageToken::SelfClosingTag(name));
                    }
                    TagKind::StartTag => {
                        let raw = raw_kind(&name);
                        self.tokens.push(PageToken::StartTag(name));
                        if let Some(kind) = raw {
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                    TagKind::EndTag => self.tokens.push(PageToken::EndTag(name)),
                }
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) => self.flush_text(),
            Token::EOFToken => {
                self.flush_text();
                self.tokens.push(PageToken::EndOfStream);
            }
            Token::NullCharacterToken | Token::ParseError(_) => {}
        }
        TokenSinkResult::Continue
    }
}
