//! Ingredient synonym table.
//!
//! Recipe authors and pantry owners rarely spell an ingredient the same way
//! ("卵" vs "たまご", "豚こま" vs "豚肉"). An [`AliasTable`] is an ordered list of
//! [`AliasRule`]s: when a normalized ingredient contains any trigger, every
//! alias of the rule becomes an acceptable pantry spelling. Rules do not
//! exclude each other, a token collects aliases from all rules it triggers.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// One synonym rule: any trigger substring pulls in all aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    pub triggers: Vec<String>,
    pub aliases: Vec<String>,
}

impl AliasRule {
    pub fn new<T, A>(triggers: T, aliases: A) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Canonical copy of the rule; blank triggers are dropped so they cannot
    /// match every token.
    fn normalized(&self) -> Self {
        Self {
            triggers: self
                .triggers
                .iter()
                .map(|t| normalize(t))
                .filter(|t| !t.is_empty())
                .collect(),
            aliases: self.aliases.iter().map(|a| normalize(a)).collect(),
        }
    }

    /// `token` must already be normalized.
    pub fn applies_to(&self, token: &str) -> bool {
        self.triggers.iter().any(|t| token.contains(t.as_str()))
    }
}

/// Household Japanese ingredients: (triggers, aliases).
const BUILTIN_RULES: &[(&[&str], &[&str])] = &[
    (&["たまご", "卵"], &["卵", "たまご", "玉子"]),
    (&["ねぎ"], &["長ねぎ", "青ねぎ", "ねぎ", "ネギ"]),
    (
        &["じゃがいも"],
        &["じゃがいも", "ジャガイモ", "男爵", "メークイン", "じゃが"],
    ),
    (&["にんじん"], &["にんじん", "人参"]),
    (
        &["玉ねぎ", "たまねぎ"],
        &["玉ねぎ", "たまねぎ", "オニオン", "玉葱"],
    ),
    (&["ごはん"], &["ご飯", "米", "白米", "ごはん"]),
    (&["豚こま"], &["豚肉", "豚こま切れ", "豚こま"]),
    (&["鶏もも"], &["鶏肉", "鶏もも", "とりもも"]),
    (
        &["ひき肉"],
        &["合いびき肉", "豚ひき肉", "鶏ひき肉", "牛ひき肉", "ひき肉"],
    ),
    (&["しょうゆ"], &["醤油", "しょうゆ"]),
    (&["みりん"], &["みりん", "本みりん"]),
    (&["酒"], &["料理酒", "酒"]),
    (&["だし"], &["顆粒だし", "和風だし", "ほんだし", "だし"]),
    (&["味噌"], &["味噌", "みそ"]),
    (&["カレー"], &["カレールウ", "カレー粉", "カレー"]),
    (&["片栗粉"], &["片栗粉", "コーンスターチ"]),
    (&["小麦粉"], &["小麦粉", "薄力粉"]),
    (&["マヨネーズ"], &["マヨ", "マヨネーズ"]),
    (&["ケチャップ"], &["トマトケチャップ", "ケチャップ"]),
];

static BUILTIN: LazyLock<AliasTable> = LazyLock::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|(triggers, aliases)| AliasRule::new(triggers.iter().copied(), aliases.iter().copied()))
        .collect()
});

/// Ordered, read-only synonym rules. Stored rules are already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Table without any rule: every ingredient only matches itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide default table, built on first use.
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    pub fn with_rule(mut self, rule: AliasRule) -> Self {
        self.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = AliasRule>) -> Self {
        self.extend(rules);
        self
    }

    pub fn push(&mut self, rule: AliasRule) {
        self.rules.push(rule.normalized());
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Candidate spellings for a canonical ingredient token, the token
    /// itself included. All returned strings are normalized except the token,
    /// which is kept as given.
    pub fn expand(&self, token: &str) -> BTreeSet<String> {
        let mut candidates = BTreeSet::from([token.to_string()]);

        for rule in self.rules.iter().filter(|rule| rule.applies_to(token)) {
            candidates.extend(rule.aliases.iter().cloned());
        }

        candidates
    }
}

impl Extend<AliasRule> for AliasTable {
    fn extend<I: IntoIterator<Item = AliasRule>>(&mut self, iter: I) {
        for rule in iter {
            self.push(rule);
        }
    }
}

impl FromIterator<AliasRule> for AliasTable {
    fn from_iter<I: IntoIterator<Item = AliasRule>>(iter: I) -> Self {
        let mut table = Self::empty();
        table.extend(iter);
        table
    }
}

/// Expand `token` with the built-in table.
pub fn expand(token: &str) -> BTreeSet<String> {
    AliasTable::builtin().expand(token)
}
