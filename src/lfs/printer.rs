use crate::common::LfsData;

pub trait PrStr {
    fn pr_str(&self) -> String;
}

impl PrStr for str {
    fn pr_str(&self) -> String {
        self.to_owned()
    }
}

impl PrStr for String {
    fn pr_str(&self) -> String {
        self.as_str().pr_str()
    }
}

pub fn pr_str(data: &LfsData) -> String {
    data.pr_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pr_str_renders_text_as_is() {
        assert_eq!(pr_str(&"(+ 1 2)".to_owned()), "(+ 1 2)");
        assert_eq!(pr_str(&String::new()), "");
        assert_eq!("\"quoted\\n\"".pr_str(), "\"quoted\\n\"");
    }
}
