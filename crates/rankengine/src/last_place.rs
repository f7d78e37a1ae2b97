use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct LastPlaceJoker(Vec<String>);

impl LastPlaceJoker {
    pub fn new(phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        LastPlaceJoker(phrases.into_iter().map(Into::into).collect())
    }

    /// Uniform pick; `None` only when no phrases are configured.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.0.choose(rng).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LastPlaceJoker {
    fn default() -> Self {
        LastPlaceJoker(default_phrases())
    }
}

pub(crate) fn default_phrases() -> Vec<String> {
    [
        "Holding the team on their back. From below.",
        "Somebody has to be last, and they volunteered",
        "Feeding is a strategy too",
        "Still looking for the Play button",
        "Creeps fear nothing when they're around",
        "Your medal called, it wants a refund",
        "Next season for sure",
        "At least the courier is safe",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
