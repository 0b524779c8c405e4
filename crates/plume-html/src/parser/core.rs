use plume_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::{Attribute, Token};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Start tags that close an open `p` element.
///
/// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
/// "If the stack of open elements has a p element in button scope, then close
/// a p element."
const CLOSES_P: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "details",
    "dialog",
    "div",
    "dl",
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
    "header",
    "hgroup",
    "hr",
    "main",
    "menu",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// [§ 13.2.6.3 Closing elements that have implied end tags](https://html.spec.whatwg.org/multipage/parsing.html#closing-elements-that-have-implied-end-tags)
///
/// For a start tag, the open elements it implicitly closes when one of them
/// is the current node.
fn implied_closes(tag_name: &str) -> &'static [&'static str] {
    match tag_name {
        "li" => &["li"],
        "dt" | "dd" => &["dt", "dd"],
        "option" => &["option"],
        "optgroup" => &["optgroup", "option"],
        "tr" => &["tr", "td", "th"],
        "td" | "th" => &["td", "th"],
        "tbody" | "tfoot" => &["thead", "tbody", "tr", "td", "th"],
        "body" => &["head"],
        _ => &[],
    }
}

/// Tree builder that keeps the document as written.
///
/// Unlike the full [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
/// algorithm, no `html`, `head` or `body` elements are implied: a fragment
/// such as `<div>x</div>` produces exactly one element under the document.
pub struct HTMLParser {
    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    ///
    /// Stores `NodeId`s into the arena.
    stack_of_open_elements: Vec<NodeId>,

    /// `NodeId::ROOT` (index 0) is the Document node.
    tree: DomTree,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,
}

impl HTMLParser {
    /// Create a new parser from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            stack_of_open_elements: Vec::new(),
            tree: DomTree::new(),
            tokens,
        }
    }

    /// Run the parser and return the DOM tree.
    #[must_use]
    pub fn run(mut self) -> DomTree {
        let tokens = std::mem::take(&mut self.tokens);
        for token in tokens {
            if !self.process_token(token) {
                break;
            }
        }
        self.tree
    }

    /// Returns `false` once the end-of-file token has been handled.
    fn process_token(&mut self, token: Token) -> bool {
        match token {
            Token::Doctype { data } => {
                let id = self.tree.alloc(NodeType::Doctype(data));
                self.tree.append_child(self.current_node(), id);
            }
            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => self.handle_start_tag(name, self_closing, attributes),
            Token::EndTag { name } => self.handle_end_tag(&name),
            Token::Comment { data } => {
                let id = self.tree.alloc(NodeType::Comment(data));
                self.tree.append_child(self.current_node(), id);
            }
            Token::Text { data } => self.insert_text(&data),
            // "Stop parsing." Open elements stay where they are.
            Token::EndOfFile => return false,
        }
        true
    }

    fn handle_start_tag(&mut self, name: String, self_closing: bool, attributes: Vec<Attribute>) {
        let closes = implied_closes(&name);
        while let Some(tag) = self.current_tag_name()
            && closes.contains(&tag)
        {
            let _ = self.stack_of_open_elements.pop();
        }
        if CLOSES_P.contains(&name.as_str()) && self.current_tag_name() == Some("p") {
            let _ = self.stack_of_open_elements.pop();
        }

        let attrs: AttributesMap = attributes
            .into_iter()
            .map(|attribute| (attribute.name, attribute.value))
            .collect();
        let is_void = VOID_ELEMENTS.contains(&name.as_str());
        let element_id = self.tree.create_element(ElementData {
            tag_name: name,
            attrs,
        });
        self.tree.append_child(self.current_node(), element_id);

        // Void elements never take children; an explicit `/>` closes any element.
        if !is_void && !self_closing {
            self.stack_of_open_elements.push(element_id);
        }
    }

    /// Pop up to and including the nearest open element with the same name.
    /// An end tag with no matching open element is ignored.
    fn handle_end_tag(&mut self, name: &str) {
        let Some(index) = self
            .stack_of_open_elements
            .iter()
            .rposition(|&id| self.tree.is_element_named(id, name))
        else {
            log::debug!("ignoring end tag </{name}> with no open element");
            return;
        };
        self.stack_of_open_elements.truncate(index);
    }

    /// [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
    ///
    /// "If there is a Text node immediately before the adjusted insertion
    /// location, then append data to that Text node's data."
    fn insert_text(&mut self, data: &str) {
        let parent_id = self.current_node();
        if let Some(&last_id) = self.tree.children(parent_id).last()
            && let Some(node) = self.tree.get_mut(last_id)
            && let NodeType::Text(ref mut text) = node.node_type
        {
            text.push_str(data);
            return;
        }
        let text_id = self.tree.create_text(data);
        self.tree.append_child(parent_id, text_id);
    }

    /// "The current node is the bottommost node in this stack of open elements."
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn current_tag_name(&self) -> Option<&str> {
        let id = *self.stack_of_open_elements.last()?;
        self.tree.as_element(id).map(|data| data.tag_name.as_str())
    }
}

/// Print a tree to stdout, one node per line.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => println!("{prefix}Document"),
        NodeType::Doctype(data) => println!("{prefix}<!{data}>"),
        NodeType::Element(data) => {
            if data.attrs.is_empty() {
                println!("{prefix}<{}>", data.tag_name);
            } else {
                let attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|(k, v)| {
                        if v.is_empty() {
                            k.to_string()
                        } else {
                            format!("{k}=\"{v}\"")
                        }
                    })
                    .collect();
                println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
            }
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            println!("{prefix}\"{display}\"");
        }
        NodeType::Comment(data) => println!("{prefix}<!-- {data} -->"),
    }
    for &child_id in tree.children(id) {
        print_tree(tree, child_id, indent + 1);
    }
}
