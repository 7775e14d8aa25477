//! Out-of-band signature overrides.
//!
//! A constructor may carry externally supplied signature metadata that
//! replaces its inferred parameter list. The payload is a parenthesized
//! parameter list, e.g. `(name: String, values: int...)`. A malformed
//! payload never aborts resolution: the caller keeps the inferred
//! parameters and records the diagnostic.

use crate::scope::TypeVariableScope;
use crate::symbols::{ParamList, ValueParameterDescriptor};
use crate::transform::TypeTransformer;
use jbind_common::{Diagnostic, diagnostic_codes};
use jbind_syntax::{ConstructorSyntax, PrimitiveKind, TypeSyntax};

/// Result of consulting the override metadata. Exactly one variant applies
/// per constructor.
pub enum OverrideOutcome {
    /// No override metadata present.
    Unchanged,
    /// Metadata parsed cleanly; this list replaces the inferred one.
    Replaced(ParamList),
    /// Metadata present but invalid; keep the inferred list.
    Failed(Diagnostic),
}

/// Consults the signature-override annotation of `ctor`, if any.
///
/// Overrides never introduce new type parameters; names in the override
/// resolve under the owning class's scope.
pub fn apply_signature_override(
    ctor: &ConstructorSyntax,
    scope: &TypeVariableScope<'_>,
    transformer: &dyn TypeTransformer,
) -> OverrideOutcome {
    let Some(text) = ctor.signature_override() else {
        return OverrideOutcome::Unchanged;
    };

    let parsed = match SignatureParser::new(text).parse_signature() {
        Ok(parsed) => parsed,
        Err(err) => {
            return OverrideOutcome::Failed(Diagnostic::error(
                diagnostic_codes::MALFORMED_SIGNATURE_OVERRIDE,
                format!("malformed signature override `{text}`: {err}"),
            ));
        }
    };

    let mut params = ParamList::new();
    for raw in parsed {
        let ty = match transformer.transform(&raw.ty, scope) {
            Ok(ty) => ty,
            Err(err) => {
                return OverrideOutcome::Failed(Diagnostic::error(
                    diagnostic_codes::MALFORMED_SIGNATURE_OVERRIDE,
                    format!("malformed signature override `{text}`: {err}"),
                ));
            }
        };
        let vararg_element = if raw.is_vararg {
            match raw.ty.component() {
                Some(component) => match transformer.transform(component, scope) {
                    Ok(element) => Some(element),
                    Err(err) => {
                        return OverrideOutcome::Failed(Diagnostic::error(
                            diagnostic_codes::MALFORMED_SIGNATURE_OVERRIDE,
                            format!("malformed signature override `{text}`: {err}"),
                        ));
                    }
                },
                None => None,
            }
        } else {
            None
        };
        params.push(ValueParameterDescriptor {
            name: raw.name,
            index: params.len(),
            ty,
            has_default: false,
            vararg_element,
        });
    }

    OverrideOutcome::Replaced(params)
}

struct ParsedParam {
    name: String,
    ty: TypeSyntax,
    is_vararg: bool,
}

/// Hand-rolled parser for the override payload grammar:
///
/// ```text
/// signature := '(' [ param ( ',' param )* ] ')'
/// param     := IDENT ':' type
/// type      := base '[]'* '...'?
/// base      := primitive | IDENT [ '<' type ( ',' type )* '>' ]
/// ```
struct SignatureParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SignatureParser<'a> {
    fn new(text: &'a str) -> SignatureParser<'a> {
        SignatureParser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse_signature(mut self) -> Result<Vec<ParsedParam>, String> {
        self.expect(b'(')?;
        let mut params = Vec::new();
        self.skip_ws();
        if !self.eat(b')') {
            loop {
                params.push(self.parse_param()?);
                self.skip_ws();
                if self.eat(b',') {
                    continue;
                }
                self.expect(b')')?;
                break;
            }
        }
        self.skip_ws();
        if self.pos != self.bytes.len() {
            return Err(format!("unexpected trailing input at offset {}", self.pos));
        }
        Ok(params)
    }

    fn parse_param(&mut self) -> Result<ParsedParam, String> {
        let name = self.parse_ident()?;
        self.expect(b':')?;
        let (ty, is_vararg) = self.parse_type()?;
        Ok(ParsedParam {
            name,
            ty,
            is_vararg,
        })
    }

    fn parse_type(&mut self) -> Result<(TypeSyntax, bool), String> {
        let mut ty = self.parse_base_type()?;
        loop {
            self.skip_ws();
            if self.eat_str("[]") {
                ty = TypeSyntax::array(ty);
            } else {
                break;
            }
        }
        let is_vararg = self.eat_str("...");
        if is_vararg {
            ty = TypeSyntax::array(ty);
        }
        Ok((ty, is_vararg))
    }

    fn parse_base_type(&mut self) -> Result<TypeSyntax, String> {
        let name = self.parse_ident()?;
        if let Some(primitive) = PrimitiveKind::from_keyword(&name) {
            return Ok(TypeSyntax::Primitive(primitive));
        }
        self.skip_ws();
        let mut args = Vec::new();
        if self.eat(b'<') {
            loop {
                let (arg, vararg) = self.parse_type()?;
                if vararg {
                    return Err("vararg marker is only allowed on a parameter".to_string());
                }
                args.push(arg);
                self.skip_ws();
                if self.eat(b',') {
                    continue;
                }
                self.expect(b'>')?;
                break;
            }
        }
        Ok(TypeSyntax::Named { name, args })
    }

    fn parse_ident(&mut self) -> Result<String, String> {
        self.skip_ws();
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            let is_start = b.is_ascii_alphabetic() || b == b'_';
            let is_continue = is_start || b.is_ascii_digit() || b == b'.';
            if self.pos == start && !is_start {
                break;
            }
            if self.pos > start && !is_continue {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return Err(format!("expected an identifier at offset {}", self.pos));
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, expected: u8) -> bool {
        self.skip_ws();
        if self.pos < self.bytes.len() && self.bytes[self.pos] == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.text[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<(), String> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(format!(
                "expected `{}` at offset {}",
                expected as char, self.pos
            ))
        }
    }
}
