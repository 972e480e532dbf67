//! HTML → Markdown serialization
//!
//! Pipeline: HTML string → html5ever `RcDom` → recursive walk → Markdown string
//!
//! Each element is turned into a Markdown fragment from its serialized children. Block
//! fragments are wrapped in `\n\n`; when fragments are joined, the newlines on either side
//! of the seam are merged and capped at one blank line. Whitespace in text is collapsed
//! the way a browser would, and Markdown-significant characters are escaped.

use super::rules::{default_rules, Element, ElementRule};
use crate::error::ConvertError;
use crate::formats::{CodeBlockStyle, HeadingStyle, HtmlSerializer, SerializeOptions};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\n]+").unwrap());
static BLOCK_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-|\+ |=+|#{1,6} |~~~|>)").unwrap());
static ORDERED_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\. ").unwrap());

const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "dd",
    "details",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Default serializer: html5ever + rcdom, extended by [`ElementRule`]s
pub struct DomSerializer {
    rules: Vec<Box<dyn ElementRule>>,
}

impl Default for DomSerializer {
    fn default() -> Self {
        DomSerializer {
            rules: default_rules(),
        }
    }
}

impl DomSerializer {
    /// A serializer with the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// A serializer with no rules at all
    pub fn without_rules() -> Self {
        DomSerializer { rules: Vec::new() }
    }

    /// Add a rule, checked before every rule already present
    pub fn with_rule<R: ElementRule + 'static>(mut self, rule: R) -> Self {
        self.rules.insert(0, Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl HtmlSerializer for DomSerializer {
    fn serialize(&self, html: &str, options: &SerializeOptions) -> Result<String, ConvertError> {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut writer = Writer {
            options,
            rules: &self.rules,
            skip_leading_space: true,
            in_table_cell: false,
        };
        let markdown = writer.children(&dom.document, "");

        Ok(markdown
            .trim_matches(|c| matches!(c, '\n' | '\r' | '\t'))
            .to_string())
    }
}

struct Writer<'a> {
    options: &'a SerializeOptions,
    rules: &'a [Box<dyn ElementRule>],
    /// Set at block boundaries and after whitespace, so the next text drops its leading space
    skip_leading_space: bool,
    /// Text written inside a table cell escapes `|`
    in_table_cell: bool,
}

impl Writer<'_> {
    fn children(&mut self, handle: &Handle, tag: &str) -> String {
        let children = handle.children.borrow();
        let mut out = String::new();

        for (i, child) in children.iter().enumerate() {
            if is_blank_text(child) {
                let after_block = i == 0 || is_block(&children[i - 1]);
                let before_block = children.get(i + 1).map_or(true, is_block);
                if after_block || before_block {
                    continue;
                }
            }
            let piece = self.node(child, tag);
            join(&mut out, &piece);
        }

        out
    }

    fn node(&mut self, handle: &Handle, parent: &str) -> String {
        match &handle.data {
            NodeData::Document => self.children(handle, ""),
            NodeData::Text { contents } => self.text(&contents.borrow()),
            NodeData::Comment { contents } => {
                if holds_blocks(parent) {
                    format!("\n\n<!--{}-->\n\n", &**contents)
                } else {
                    self.skip_leading_space = false;
                    format!("<!--{}-->", &**contents)
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let element = element_from_dom(&name.local, &attrs.borrow());
                self.element(handle, &element, parent)
            }
            _ => String::new(),
        }
    }

    fn element(&mut self, handle: &Handle, element: &Element, parent: &str) -> String {
        let tag = element.tag();
        let block = BLOCK_TAGS.contains(&tag);
        if block {
            self.skip_leading_space = true;
        }

        let out = if let Some(rule) = self.rules.iter().find(|rule| rule.matches(element)) {
            let content = self.children(handle, tag);
            let replacement = rule.replacement(element, &content, self.options);
            log::trace!("rule '{}' replaced <{tag}>", rule.name());
            replacement
        } else {
            self.builtin(handle, element, parent)
        };

        if block {
            self.skip_leading_space = true;
        }
        out
    }

    fn builtin(&mut self, handle: &Handle, element: &Element, parent: &str) -> String {
        let tag = element.tag();
        match tag {
            "head" | "script" | "style" | "template" | "title" | "noscript" => String::new(),
            "html" | "body" => self.children(handle, tag),
            "p" => {
                let content = self.children(handle, tag);
                format!("\n\n{}\n\n", content.trim())
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = usize::from(tag.as_bytes()[1] - b'0');
                let content = self.children(handle, tag);
                self.heading(level, &content)
            }
            "blockquote" => {
                let content = self.children(handle, tag);
                let quoted: Vec<String> = content
                    .trim_matches('\n')
                    .split('\n')
                    .map(|line| {
                        if line.is_empty() {
                            ">".to_string()
                        } else {
                            format!("> {line}")
                        }
                    })
                    .collect();
                format!("\n\n{}\n\n", quoted.join("\n"))
            }
            "ul" | "ol" => self.list(handle, element, parent),
            "li" => {
                let prefix = format!("{} ", self.options.bullet_list_marker);
                let item = self.list_item(handle, &prefix);
                format!("\n\n{item}\n\n")
            }
            "pre" => self.code_block(handle),
            "hr" => "\n\n---\n\n".to_string(),
            "br" => {
                self.skip_leading_space = true;
                "  \n".to_string()
            }
            "em" | "i" => {
                let content = self.children(handle, tag);
                delimit(&content, &self.options.em_delimiter)
            }
            "strong" | "b" => {
                let content = self.children(handle, tag);
                delimit(&content, &self.options.strong_delimiter)
            }
            "del" | "s" | "strike" => {
                let content = self.children(handle, tag);
                delimit(&content, "~~")
            }
            "code" => {
                self.skip_leading_space = false;
                let code = inline_code(&text_content(handle));
                if self.in_table_cell {
                    code.replace('|', "\\|")
                } else {
                    code
                }
            }
            "a" => {
                let content = self.children(handle, tag);
                match element.attr("href") {
                    Some(href) => {
                        let href = href.replace('(', "\\(").replace(')', "\\)");
                        format!("[{content}]({href}{})", title_suffix(element))
                    }
                    None => content,
                }
            }
            "img" => {
                self.skip_leading_space = false;
                match element.attr("src") {
                    Some(src) => {
                        let alt = element.attr("alt").unwrap_or_default().replace('\n', " ");
                        format!("![{alt}]({src}{})", title_suffix(element))
                    }
                    None => String::new(),
                }
            }
            "input" if element.attr("type") == Some("checkbox") => {
                self.skip_leading_space = true;
                if element.has_attr("checked") {
                    "[x] ".to_string()
                } else {
                    "[ ] ".to_string()
                }
            }
            "input" => String::new(),
            "table" => self.table(handle),
            _ if BLOCK_TAGS.contains(&tag) => {
                let content = self.children(handle, tag);
                format!("\n\n{content}\n\n")
            }
            _ => self.children(handle, tag),
        }
    }

    fn text(&mut self, raw: &str) -> String {
        let collapsed = WHITESPACE.replace_all(raw, " ");
        let text: &str = if self.skip_leading_space {
            collapsed.trim_start_matches(' ')
        } else {
            &collapsed
        };
        if text.is_empty() {
            return String::new();
        }
        self.skip_leading_space = text.ends_with(' ');
        let escaped = escape(text);
        if self.in_table_cell {
            escaped.replace('|', "\\|")
        } else {
            escaped
        }
    }

    fn heading(&self, level: usize, content: &str) -> String {
        let content = content.trim().replace('\n', " ");
        if self.options.heading_style == HeadingStyle::Setext && level <= 2 && !content.is_empty()
        {
            let mark = if level == 1 { "=" } else { "-" };
            let underline = mark.repeat(content.chars().count().max(3));
            format!("\n\n{content}\n{underline}\n\n")
        } else {
            format!("\n\n{} {content}\n\n", "#".repeat(level))
        }
    }

    fn list(&mut self, handle: &Handle, element: &Element, parent: &str) -> String {
        let ordered = element.tag() == "ol";
        let start: usize = element
            .attr("start")
            .and_then(|start| start.trim().parse().ok())
            .unwrap_or(1);

        let items: Vec<Handle> = child_elements(handle)
            .into_iter()
            .filter(|child| tag_of(child) == Some("li"))
            .collect();
        let loose = items
            .iter()
            .any(|item| child_elements(item).iter().any(|c| tag_of(c) == Some("p")));

        let mut rendered = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let prefix = if ordered {
                format!("{}. ", start + index)
            } else {
                format!("{} ", self.options.bullet_list_marker)
            };
            self.skip_leading_space = true;
            rendered.push(self.list_item(item, &prefix));
        }

        let body = rendered.join(if loose { "\n\n" } else { "\n" });
        if parent == "li" {
            format!("\n{body}\n")
        } else {
            format!("\n\n{body}\n\n")
        }
    }

    fn list_item(&mut self, handle: &Handle, prefix: &str) -> String {
        let content = self.children(handle, "li");
        let content = content.trim_start_matches('\n').trim_end();
        let indent = " ".repeat(prefix.chars().count());

        let mut out = String::from(prefix);
        for (i, line) in content.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
                if !line.is_empty() {
                    out.push_str(&indent);
                }
            }
            out.push_str(line);
        }
        out
    }

    fn code_block(&mut self, handle: &Handle) -> String {
        let code_element = child_elements(handle)
            .into_iter()
            .find(|child| tag_of(child) == Some("code"));
        let (code, language) = match &code_element {
            Some(code) => (text_content(code), code_language(code)),
            None => (text_content(handle), String::new()),
        };
        let code = code.strip_suffix('\n').unwrap_or(&code);

        match self.options.code_block_style {
            CodeBlockStyle::Fenced => {
                let fence = "`".repeat(fence_length(code));
                format!("\n\n{fence}{language}\n{code}\n{fence}\n\n")
            }
            CodeBlockStyle::Indented => {
                let indented: Vec<String> = code
                    .split('\n')
                    .map(|line| {
                        if line.is_empty() {
                            String::new()
                        } else {
                            format!("    {line}")
                        }
                    })
                    .collect();
                format!("\n\n{}\n\n", indented.join("\n"))
            }
        }
    }

    fn table(&mut self, handle: &Handle) -> String {
        let mut rows: Vec<Handle> = Vec::new();
        for child in child_elements(handle) {
            match tag_of(&child) {
                Some("thead" | "tbody" | "tfoot") => rows.extend(
                    child_elements(&child)
                        .into_iter()
                        .filter(|row| tag_of(row) == Some("tr")),
                ),
                Some("tr") => rows.push(child),
                _ => {}
            }
        }

        let mut alignments: Vec<Option<String>> = Vec::new();
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut line = Vec::new();
            for cell in child_elements(row) {
                let Some(tag @ ("th" | "td")) = tag_of(&cell) else {
                    continue;
                };
                if r == 0 {
                    alignments.push(cell_alignment(&cell));
                }
                self.skip_leading_space = true;
                self.in_table_cell = true;
                let content = self.children(&cell, tag);
                self.in_table_cell = false;
                line.push(content.trim().replace('\n', " "));
            }
            cells.push(line);
        }

        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return String::new();
        }

        let mut lines = Vec::with_capacity(cells.len() + 1);
        for (r, mut line) in cells.into_iter().enumerate() {
            line.resize(columns, String::new());
            lines.push(format!("| {} |", line.join(" | ")));
            if r == 0 {
                let delimiters: Vec<&str> = (0..columns)
                    .map(|c| match alignments.get(c).and_then(|a| a.as_deref()) {
                        Some("left") => ":--",
                        Some("right") => "--:",
                        Some("center") => ":-:",
                        _ => "---",
                    })
                    .collect();
                lines.push(format!("| {} |", delimiters.join(" | ")));
            }
        }

        format!("\n\n{}\n\n", lines.join("\n"))
    }
}

/// Append `piece`, merging the newlines on both sides of the seam into at most one blank line.
fn join(out: &mut String, piece: &str) {
    if piece.is_empty() {
        return;
    }
    let body = piece.trim_start_matches('\n');
    let leading = piece.len() - body.len();
    let kept = out.trim_end_matches('\n').len();
    let trailing = out.len() - kept;

    if leading == 0 && trailing == 0 {
        out.push_str(piece);
        return;
    }

    out.truncate(kept);
    if leading > 0 {
        let kept = out.trim_end_matches([' ', '\t']).len();
        out.truncate(kept);
    }
    let separator = trailing.max(leading).min(2);
    out.push_str(&"\n\n"[..separator]);
    out.push_str(body);
}

/// Escape characters that would otherwise read as Markdown syntax.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '`' | '[' | ']' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    if BLOCK_START.is_match(&escaped) {
        escaped.insert(0, '\\');
        escaped
    } else {
        ORDERED_START.replace(&escaped, "${1}\\. ").into_owned()
    }
}

/// Wrap `content` in `delimiter`, keeping flanking whitespace outside the delimiters.
fn delimit(content: &str, delimiter: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }
    let start = content.trim_start();
    let leading = &content[..content.len() - start.len()];
    let inner = start.trim_end();
    let trailing = &start[inner.len()..];
    format!("{leading}{delimiter}{inner}{delimiter}{trailing}")
}

fn inline_code(code: &str) -> String {
    let code = code.replace(['\r', '\n'], " ");
    if code.is_empty() {
        return String::new();
    }

    let runs = backtick_runs(&code);
    let mut width = 1;
    while runs.contains(&width) {
        width += 1;
    }
    let delimiter = "`".repeat(width);

    let padded = code.starts_with('`')
        || code.ends_with('`')
        || (code.starts_with(' ') && code.ends_with(' ') && !code.trim().is_empty());
    let pad = if padded { " " } else { "" };
    format!("{delimiter}{pad}{code}{pad}{delimiter}")
}

fn backtick_runs(text: &str) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

/// Three backticks, or one more than the longest backtick fence inside the code.
fn fence_length(code: &str) -> usize {
    code.split('\n')
        .map(|line| line.trim_start().chars().take_while(|&c| c == '`').count())
        .filter(|&run| run >= 3)
        .map(|run| run + 1)
        .fold(3, usize::max)
}

fn code_language(code: &Handle) -> String {
    let NodeData::Element { attrs, .. } = &code.data else {
        return String::new();
    };
    let attrs = attrs.borrow();
    attrs
        .iter()
        .find(|attr| &*attr.name.local == "class")
        .and_then(|attr| {
            attr.value
                .split_whitespace()
                .find_map(|class| class.strip_prefix("language-").map(str::to_string))
        })
        .unwrap_or_default()
}

fn cell_alignment(cell: &Handle) -> Option<String> {
    let NodeData::Element { attrs, .. } = &cell.data else {
        return None;
    };
    let attrs = attrs.borrow();
    for attr in attrs.iter() {
        match &*attr.name.local {
            "align" => return Some(attr.value.trim().to_ascii_lowercase()),
            "style" => {
                let style = attr.value.to_ascii_lowercase();
                if let Some(rest) = style.split("text-align:").nth(1) {
                    let value = rest.split(';').next().unwrap_or_default().trim();
                    return Some(value.to_string());
                }
            }
            _ => {}
        }
    }
    None
}

fn title_suffix(element: &Element) -> String {
    element
        .attr("title")
        .map(|title| format!(" \"{}\"", title.replace('"', "\\\"")))
        .unwrap_or_default()
}

fn element_from_dom(tag: &str, attrs: &[Attribute]) -> Element {
    attrs.iter().fold(Element::new(tag), |element, attr| {
        element.with_attr(&*attr.name.local, attr.value.to_string())
    })
}

fn tag_of(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn child_elements(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    collect_text(handle, &mut text);
    text
}

fn collect_text(handle: &Handle, text: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, text),
            _ => {}
        }
    }
}

fn is_blank_text(handle: &Handle) -> bool {
    match &handle.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

fn is_block(handle: &Handle) -> bool {
    match &handle.data {
        NodeData::Comment { .. } => true,
        NodeData::Element { name, .. } => BLOCK_TAGS.contains(&&*name.local),
        _ => false,
    }
}

/// Whether a comment directly inside `tag` stands on its own line.
fn holds_blocks(tag: &str) -> bool {
    matches!(
        tag,
        "" | "html"
            | "body"
            | "blockquote"
            | "li"
            | "div"
            | "section"
            | "article"
            | "main"
            | "aside"
            | "header"
            | "footer"
            | "nav"
            | "figure"
            | "details"
            | "dd"
    )
}
