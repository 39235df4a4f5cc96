use crate::Outcome;

impl<V, E> Outcome<V, E> {
    /// Collects every `Ok` value in order, or stops at the first `Error`.
    ///
    /// Items after the first error are never pulled from the iterator.
    /// An empty input is `Ok(vec![])`.
    pub fn all<I>(items: I) -> Outcome<Vec<V>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().collect()
    }
}

impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<V, E>>,
    {
        let mut error = None;
        let collected = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Error(err) => {
                    error = Some(err);
                    None
                }
            })
            .collect();

        match error {
            Some(err) => Self::Error(err),
            None => Self::Ok(collected),
        }
    }
}
