/// Declares a group of tunables once and generates two structs from it: `<Name>Cli`, to
/// be flattened into a clap parser, and `<Name>Args`, the plain config passed around in
/// the library. `<Name>Args` gets a `Default` impl from the listed defaults, a builder
/// style setter per field, and `<Name>Cli::to_args` converts between them.
#[macro_export]
macro_rules! args {
    ($(#$argsmeta:tt)* $name:ident {
        $($fhelp:literal $fname:ident: $ftype:ty = $fdefault:expr;)*
    }) => {
        $crate::bin_common::args::args_helper::paste! {
            #[derive(clap::Args, Debug)]
            pub struct [<$name Cli>] {
                $(
                    #[arg(long, default_value_t = ($fdefault), help = $fhelp)]
                    $fname: $ftype,
                )*
            }

            $(#$argsmeta)*
            pub struct [<$name Args>] {
                $(
                    $fname: $ftype,
                )*
            }

            impl std::default::Default for [<$name Args>] {
                fn default() -> Self {
                    Self {
                        $(
                            $fname: $fdefault,
                        )*
                    }
                }
            }

            impl [<$name Args>] {
                $(
                    pub fn $fname(mut self, $fname: $ftype) -> Self {
                        self.$fname = $fname;
                        self
                    }
                )*
            }

            impl [<$name Cli>] {
                pub fn to_args(&self) -> [<$name Args>] {
                    [<$name Args>] {
                        $(
                            $fname: self.$fname.clone(),
                        )*
                    }
                }
            }
        }
    };
}

pub use args;
pub use paste::paste;
