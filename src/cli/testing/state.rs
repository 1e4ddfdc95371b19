use crate::base;

/// The expected or actual objects read from a working directory. Unset fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    tl: Option<base::Transactionlist>,
    /// Contents of the report output file named by the config.
    results: Option<String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the directory's [`base::Transactionlist`].
    pub fn with_tl<T>(mut self, tl: T) -> Self
    where
        T: TryInto<base::Transactionlist> + std::fmt::Debug,
        <T as TryInto<base::Transactionlist>>::Error: std::fmt::Debug,
    {
        self.tl = Some(tl.try_into().unwrap());
        self
    }

    /// Sets the contents of the report output file.
    pub fn with_results(mut self, s: &str) -> Self {
        self.results = Some(s.to_string());
        self
    }

    /// Reads objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        let config = read!(base::Config);
        let output = fs.output_path(config.as_ref().unwrap_or(&base::Config::default()));
        Self {
            tl: read!(base::Transactionlist),
            results: std::fs::read_to_string(output).ok(),
            config,
        }
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    tl: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the directory's [`base::Transactionlist`] file contents.
    pub fn with_tl(mut self, s: &'a str) -> Self {
        self.tl = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Serde,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Transactionlist>(fs, self.tl);
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.tl {
            os = os.with_tl(s);
        }
        os
    }
}
