use studio_models::i18n::Locale;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TextService: Send + Sync + 'static {
    /// The locale texts are looked up in first.
    fn locale(&self) -> Locale;

    /// Return the text stored under the dotted `key`, or the key itself if no
    /// dictionary contains it.
    fn lookup(&self, key: &str) -> String;

    /// Return the list stored under the dotted `key`, or an empty list.
    fn lookup_list(&self, key: &str) -> Vec<String>;
}

#[cfg(feature = "mock")]
impl MockTextService {
    /// Mock that answers every scalar lookup with the key itself.
    pub fn echo() -> Self {
        let mut mock = Self::new();
        mock.expect_locale().return_const(Locale::En);
        mock.expect_lookup().returning(|key| key.to_owned());
        mock
    }

    pub fn with_lookup_list(mut self, key: &'static str, result: Vec<String>) -> Self {
        self.expect_lookup_list()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| result);
        self
    }
}
