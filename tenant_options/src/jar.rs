//! Lecture d'une chaîne de cookies telle que l'expose `document.cookie`
//! (`a=1; b=2; c=3`).

/// Vue empruntée sur une chaîne de cookies. Rien n'est copié ni mis en cache :
/// l'appelant fournit la valeur courante à chaque lecture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CookieJar<'a> {
    raw: &'a str,
}

impl<'a> CookieJar<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Entrées dans l'ordre, sans l'espace qui suit le `;` séparateur.
    /// La fin de chaque entrée est laissée telle quelle.
    pub fn entries(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.raw
            .split(';')
            .map(str::trim_start)
            .filter(|entry| !entry.is_empty())
    }

    /// Valeur de la première entrée qui commence par `name=`.
    ///
    /// Seul le premier préfixe est retiré : `tenant=tenant=x` donne `tenant=x`.
    pub fn find(&self, name: &str) -> Option<&'a str> {
        self.entries().find_map(|entry| {
            entry
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
    }
}

impl<'a> From<&'a str> for CookieJar<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_skip_separator_whitespace() {
        let jar = CookieJar::new("a=1; b=2;c=3;  d=4");
        let entries: Vec<_> = jar.entries().collect();
        assert_eq!(entries, vec!["a=1", "b=2", "c=3", "d=4"]);
    }

    #[test]
    fn test_find_returns_first_match() {
        let jar = CookieJar::new("tenant=one; tenant=two");
        assert_eq!(jar.find("tenant"), Some("one"));
    }

    #[test]
    fn test_find_requires_exact_name() {
        // `tenantx=` ne doit pas être pris pour `tenant=`
        let jar = CookieJar::new("tenantx=nope; xtenant=nope");
        assert_eq!(jar.find("tenant"), None);

        let jar = CookieJar::new("tenantx=nope; tenant=yes");
        assert_eq!(jar.find("tenant"), Some("yes"));
    }

    #[test]
    fn test_find_strips_prefix_once() {
        let jar = CookieJar::new("tenant=tenant=x");
        assert_eq!(jar.find("tenant"), Some("tenant=x"));
    }

    #[test]
    fn test_find_on_empty_and_valueless() {
        assert_eq!(CookieJar::new("").find("session"), None);
        assert_eq!(CookieJar::new(";;").find("session"), None);
        assert_eq!(CookieJar::new("session").find("session"), None);
        assert_eq!(CookieJar::new("session=").find("session"), Some(""));
    }
}
