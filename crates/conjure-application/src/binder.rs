//! Argument binding
//!
//! Maps an argument bag onto formal parameters. Each parameter reads its
//! value by name first, then by position. A missing parameter with a default
//! is left out when nothing after it was supplied (the host fills trailing
//! defaults), and emitted verbatim when something later was. A missing
//! required parameter gets `null`, which lets object parameters fall through
//! to auto-construction.

use conjure_domain::{ArgumentBag, ParameterSpec, Result, TypeTag, Value};
use tracing::trace;

use crate::converter::Converter;

/// How one parameter is filled
#[derive(Debug)]
enum Slot {
    /// Values to convert against the parameter's types
    Convert(Vec<Value>),
    /// The declared default, passed without conversion
    Default(Value),
    /// Nothing; the parameter is a trailing default or an empty variadic
    Omitted,
}

impl Converter {
    /// Build the positional argument list for `params` from `bag`
    ///
    /// `self_tag` replaces the `self` placeholder in parameter types. A
    /// variadic parameter supplied with an array expands to its elements, so
    /// the result can be longer than `params`.
    pub fn bind_arguments(
        &self,
        bag: &ArgumentBag,
        params: &[ParameterSpec],
        self_tag: Option<&TypeTag>,
    ) -> Result<Vec<Value>> {
        let slots = plan_slots(bag, params);
        let mut args = Vec::with_capacity(params.len());
        for (param, slot) in params.iter().zip(slots) {
            match slot {
                Slot::Default(value) => args.push(value),
                Slot::Omitted => {}
                Slot::Convert(values) => {
                    let targets = target_types(param, self_tag);
                    for value in values {
                        trace!(parameter = %param.name, "binding argument");
                        args.push(self.convert(&targets, value)?);
                    }
                }
            }
        }
        Ok(args)
    }
}

/// Decide every parameter's slot, walking from the last parameter back
fn plan_slots(bag: &ArgumentBag, params: &[ParameterSpec]) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(params.len());
    let mut later_emitted = false;
    for param in params.iter().rev() {
        let raw = bag
            .get_named(&param.name)
            .or_else(|| bag.get_index(param.position));
        let slot = match (raw, &param.default) {
            (None, Some(default)) if later_emitted => Slot::Default(default.clone()),
            (Some(Value::Array(items)), _) if param.variadic => {
                Slot::Convert(items.values().cloned().collect())
            }
            (Some(value), _) => Slot::Convert(vec![value.clone()]),
            (None, None) if !param.variadic => Slot::Convert(vec![Value::Null]),
            (None, _) => Slot::Omitted,
        };
        later_emitted |= match &slot {
            Slot::Convert(values) => !values.is_empty(),
            Slot::Default(_) => true,
            Slot::Omitted => false,
        };
        slots.push(slot);
    }
    slots.reverse();
    slots
}

fn target_types(param: &ParameterSpec, self_tag: Option<&TypeTag>) -> Vec<TypeTag> {
    param
        .types(true)
        .into_iter()
        .map(|tag| match (tag, self_tag) {
            (TypeTag::SelfType, Some(self_tag)) => self_tag.clone(),
            (tag, _) => tag,
        })
        .collect()
}
