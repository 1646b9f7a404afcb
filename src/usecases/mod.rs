macro_rules! usecase {
    ($n:ident : { $( $i:tt )* } => { $( $o:tt )* }) => {
        pub mod $n {
            #[allow(unused_imports)]
            use crate::entities;

            pub trait Usecase {
                fn handle(
                    &self,
                    state: &mut entities::BoardState,
                    data: Input,
                ) -> ::core::result::Result<Output, crate::usecases::ActionError>;
            }

            #[derive(Debug, Clone)]
            pub struct Input { $( $i )* }

            #[derive(Debug, Clone)]
            pub struct Output { $( $o )* }
        }
    };
}

pub mod member;
pub mod post;

use crate::entities::PostId;

/// input the board refuses. shown to the user as an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    EmptyRequiredField { field: Field },
    DuplicateIdentifier { email: String },
    InvalidCredentials,
    Unauthenticated,
    PostNotFound { id: PostId },
    NotAnElection { id: PostId },
    UnknownOption { option: String },
    LoggedIn { email: String },
}

impl ::std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            ActionError::EmptyRequiredField { field } => write!(f, "please fill in the {}.", field),
            ActionError::DuplicateIdentifier { email } =>
                write!(f, "`{}` is already registered.", email),
            ActionError::InvalidCredentials => write!(f, "email or password is incorrect."),
            ActionError::Unauthenticated => write!(f, "please log in first."),
            ActionError::PostNotFound { id } => write!(f, "cannot find post `{}`.", id),
            ActionError::NotAnElection { id } => write!(f, "post `{}` is not an election.", id),
            ActionError::UnknownOption { option } =>
                write!(f, "`{}` is not an option of this election.", option),
            ActionError::LoggedIn { email } =>
                write!(f, "`{}` is already a member. log out to join as a guest.", email),
        }
    }
}

impl ::std::error::Error for ActionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Body,
    Title,
    Options,
    Comment,
    Email,
    Password,
    Name,
}

impl ::std::fmt::Display for Field {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let s = match self {
            Field::Body => "post body",
            Field::Title => "title",
            Field::Options => "options (at least two)",
            Field::Comment => "comment",
            Field::Email => "email",
            Field::Password => "password",
            Field::Name => "name",
        };

        f.write_str(s)
    }
}
