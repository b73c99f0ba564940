use crate::catalog::capability::Capability;
use crate::catalog::catalog_model::ActionDescriptor;
use crate::engine::config::SyntaxConfig;

use super::snippet_model::{ComposedSnippet, NamedList};
use super::token::{
    action_token, argument_token, arguments_token, attribute_token, element_token, regex_token,
};

// ============================================================================
// Compile inputs
// ============================================================================

/// Catalog-wide data the compiler needs besides the descriptor itself.
#[derive(Debug, Clone, Copy)]
pub struct CompileContext<'a> {
    pub locators: &'a [String],
    pub attributes: &'a [String],
    pub syntax: &'a SyntaxConfig,
}

// ============================================================================
// Capability folds
// ============================================================================

/// A capability that extends a composition chain, in fold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fold {
    Element,
    Attribute,
    Regex,
}

impl Fold {
    const ORDER: [Fold; 3] = [Fold::Element, Fold::Attribute, Fold::Regex];

    fn capability(self) -> Capability {
        match self {
            Fold::Element => Capability::ElementTarget,
            Fold::Attribute => Capability::ElementAttribute,
            Fold::Regex => Capability::Regex,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Fold::Element => "w/ element",
            Fold::Attribute => "w/ attribute",
            Fold::Regex => "w/ regex",
        }
    }

    fn token(self, descriptor: &ActionDescriptor, ctx: &CompileContext) -> String {
        match self {
            Fold::Element => element_token(&descriptor.verb, ctx.locators),
            Fold::Attribute => attribute_token(ctx.attributes),
            Fold::Regex => regex_token(),
        }
    }
}

/// Accumulated name and token parts for one variant.
struct Chain {
    names: Vec<String>,
    tokens: Vec<String>,
}

impl Chain {
    fn new(name: String, token: String) -> Self {
        Self {
            names: vec![name],
            tokens: vec![token],
        }
    }

    fn append(&mut self, name: &str, token: String) {
        self.names.push(name.to_string());
        self.tokens.push(token);
    }

    fn emit(&self, descriptor: &ActionDescriptor) -> ComposedSnippet {
        ComposedSnippet {
            name: self.names.join(" "),
            template: self.tokens.join(" "),
            documentation: descriptor.description.clone(),
            detail: descriptor.source.clone(),
        }
    }
}

// ============================================================================
// Compiler
// ============================================================================

/// Compile one descriptor into its snippets.
///
/// Every descriptor yields `"<base> w/ argument"`. CLI-capable descriptors
/// also yield `"<base> w/ arguments"`. Each variant then grows cumulatively:
/// every true capability appends its suffix and token to what came before
/// and emits a new snippet. A false capability is skipped without resetting
/// the chain.
pub fn compose_for(descriptor: &ActionDescriptor, ctx: &CompileContext) -> Vec<ComposedSnippet> {
    let base = descriptor.base_phrase();
    let action = action_token(&base, &descriptor.aliases);

    let mut variants = vec![Chain::new(
        format!("{} w/ argument", base),
        format!("{} {}", action, argument_token()),
    )];
    if descriptor.has(Capability::CliArguments) {
        variants.push(Chain::new(
            format!("{} w/ arguments", base),
            format!(
                "{} {}",
                action,
                arguments_token(&ctx.syntax.flag_list_opener, &ctx.syntax.flag_introducer)
            ),
        ));
    }

    let mut snippets = Vec::new();
    for mut chain in variants {
        let mut emitted = NamedList::new();
        emitted.push(chain.emit(descriptor));

        for fold in Fold::ORDER {
            if !descriptor.has(fold.capability()) {
                continue;
            }
            chain.append(fold.suffix(), fold.token(descriptor, ctx));
            emitted.push(chain.emit(descriptor));
        }

        snippets.extend(emitted.into_vec());
    }

    snippets
}
