//! Declarative style rules.
//!
//! A `RuleTable` is an ordered list of `(predicate, value)` pairs with a
//! fallback. The engine evaluates the serialised form once per feature per
//! frame; `resolve` evaluates the same table locally so the tables can be
//! checked without an engine.

use crate::constants::HOVER_STATE_KEY;
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// Condition a rule fires on.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// Text attribute equals one of `labels` (case-sensitive)
    CategoryIn { property: String, labels: Vec<String> },
    /// Boolean feature-state flag equals `value`; an unset flag reads `false`
    FeatureState { key: String, value: bool },
}

impl Predicate {
    pub fn category_in<I, S>(property: &str, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::CategoryIn {
            property: property.to_string(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn hovered() -> Self {
        Predicate::FeatureState {
            key: HOVER_STATE_KEY.to_string(),
            value: true,
        }
    }

    pub fn matches(&self, ctx: &StyleContext<'_>) -> bool {
        match self {
            Predicate::CategoryIn { property, labels } => ctx
                .property(property)
                .is_some_and(|v| labels.iter().any(|label| label == v)),
            Predicate::FeatureState { key, value } => ctx.state(key) == *value,
        }
    }

    fn to_condition(&self) -> Value {
        match self {
            Predicate::CategoryIn { property, labels } => {
                json!(["in", ["get", property], ["literal", labels]])
            }
            Predicate::FeatureState { key, value } => {
                let flag = json!(["boolean", ["feature-state", key], false]);
                if *value { flag } else { json!(["!", flag]) }
            }
        }
    }
}

/// What a rule table is evaluated against: the feature's attributes and its
/// engine feature-state flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleContext<'a> {
    properties: Option<&'a Map<String, Value>>,
    state: Option<&'a HashMap<String, bool>>,
}

impl<'a> StyleContext<'a> {
    pub fn new(properties: &'a Map<String, Value>, state: &'a HashMap<String, bool>) -> Self {
        Self {
            properties: Some(properties),
            state: Some(state),
        }
    }

    pub fn with_properties(properties: &'a Map<String, Value>) -> Self {
        Self {
            properties: Some(properties),
            state: None,
        }
    }

    pub fn with_state(state: &'a HashMap<String, bool>) -> Self {
        Self {
            properties: None,
            state: Some(state),
        }
    }

    fn property(&self, key: &str) -> Option<&'a str> {
        self.properties?.get(key)?.as_str()
    }

    fn state(&self, key: &str) -> bool {
        self.state.and_then(|s| s.get(key)).copied().unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule<V> {
    pub when: Predicate,
    pub then: V,
}

/// Ordered rules plus a terminal fallback. First match wins.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleTable<V> {
    rules: Vec<Rule<V>>,
    fallback: V,
}

impl<V> RuleTable<V>
where
    V: Clone + Into<Value>,
{
    pub fn new(fallback: V) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule after the existing ones.
    pub fn rule(mut self, when: Predicate, then: V) -> Self {
        self.rules.push(Rule { when, then });
        self
    }

    /// Two-way table keyed on the hover flag.
    pub fn hover(hovered: V, otherwise: V) -> Self {
        Self::new(otherwise).rule(Predicate::hovered(), hovered)
    }

    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }

    pub fn resolve(&self, ctx: &StyleContext<'_>) -> &V {
        self.rules
            .iter()
            .find(|rule| rule.when.matches(ctx))
            .map(|rule| &rule.then)
            .unwrap_or(&self.fallback)
    }

    /// Engine expression for this table.
    ///
    /// Tables that only test one attribute for membership become a `match`;
    /// anything else becomes a `case`.
    pub fn to_expression(&self) -> Value {
        if self.rules.is_empty() {
            return self.fallback.clone().into();
        }

        match self.match_property() {
            Some(property) => self.match_expression(property),
            None => self.case_expression(),
        }
    }

    fn match_property(&self) -> Option<&str> {
        let mut property = None;
        for rule in &self.rules {
            let Predicate::CategoryIn { property: p, .. } = &rule.when else {
                return None;
            };
            match property {
                None => property = Some(p.as_str()),
                Some(existing) if existing == p => {}
                Some(_) => return None,
            }
        }
        property
    }

    fn match_expression(&self, property: &str) -> Value {
        let mut expr = vec![json!("match"), json!(["get", property])];
        for rule in &self.rules {
            if let Predicate::CategoryIn { labels, .. } = &rule.when {
                let labels = match labels.as_slice() {
                    [single] => json!(single),
                    many => json!(many),
                };
                expr.push(labels);
                expr.push(rule.then.clone().into());
            }
        }
        expr.push(self.fallback.clone().into());
        Value::Array(expr)
    }

    fn case_expression(&self) -> Value {
        let mut expr = vec![json!("case")];
        for rule in &self.rules {
            expr.push(rule.when.to_condition());
            expr.push(rule.then.clone().into());
        }
        expr.push(self.fallback.clone().into());
        Value::Array(expr)
    }
}
