#![deny(missing_docs)]
#![doc = "Matchers over sequence shaped values: element-wise quantifiers, unordered membership and ordered subsequence search."]

mod every;
mod macros;
mod membership;
mod subsequence;

pub use every::{any_item_matching, every_item_matching, AnyItemMatching, EveryItemMatching};
pub use membership::{item, item_in, items, try_items, Item, ItemIn, Items};
pub use subsequence::{sequence, try_sequence, Sequence};

pub use probity_core::{MatchFailure, Matcher, Value};
