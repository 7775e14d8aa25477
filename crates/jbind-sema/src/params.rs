//! Value-parameter resolution.
//!
//! This path is shared with ordinary method resolution, which is why the
//! result carries a receiver slot: a method may declare an extension
//! receiver, a constructor never does. The constructor orchestrator treats a
//! non-empty receiver slot as a fatal contract breach.

use crate::scope::TypeVariableScope;
use crate::symbols::{ParamList, ValueParameterDescriptor};
use crate::transform::{TransformError, TypeTransformer};
use crate::types::SemanticType;
use jbind_syntax::ParamSyntax;

/// Output of parameter resolution: the ordered descriptors plus the
/// receiver type, if one was declared.
pub struct ResolvedParameters {
    pub receiver: Option<SemanticType>,
    pub params: ParamList,
}

/// Resolves an ordered parameter syntax list under a type-variable scope.
///
/// Receiver parameters fill the receiver slot and do not consume a position
/// index; value parameters are indexed 0-based in declaration order.
pub fn resolve_value_parameters(
    params: &[ParamSyntax],
    scope: &TypeVariableScope<'_>,
    transformer: &dyn TypeTransformer,
) -> Result<ResolvedParameters, TransformError> {
    let mut receiver = None;
    let mut resolved = ParamList::new();

    for param in params {
        let ty = transformer.transform(&param.ty, scope)?;
        if param.is_receiver {
            receiver = Some(ty);
            continue;
        }
        let vararg_element = if param.is_vararg {
            match param.ty.component() {
                Some(component) => Some(transformer.transform(component, scope)?),
                None => None,
            }
        } else {
            None
        };
        resolved.push(ValueParameterDescriptor {
            name: param.name.clone(),
            index: resolved.len(),
            ty,
            has_default: false,
            vararg_element,
        });
    }

    Ok(ResolvedParameters {
        receiver,
        params: resolved,
    })
}
