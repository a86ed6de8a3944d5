use strum_macros::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Operation {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("+".parse::<Operation>()?, Operation::Add);
        assert_eq!("-".parse::<Operation>()?, Operation::Sub);
        assert_eq!("*".parse::<Operation>()?, Operation::Mul);
        assert_eq!("/".parse::<Operation>()?, Operation::Div);
        assert!("%".parse::<Operation>().is_err());
        assert!("add".parse::<Operation>().is_err());

        assert_eq!(Operation::Div.to_string(), "/");
        assert_eq!(Operation::Sub.as_ref(), "-");
        Ok(())
    }
}
