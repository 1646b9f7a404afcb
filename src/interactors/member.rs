use super::*;
use crate::entities::{AccessMode, Actor, BoardState, Member, User};
use crate::usecases::member::{join, log_in, log_out, sign_up};
use crate::utils::{AlsoChain, LetChain};

/// flips `joined` for the guest, listing or unlisting it as a member.
///
/// accounts are listed from sign-up on, so joining is refused while logged in.
pub struct MemberJoinInteractor {
    pub mode: AccessMode,
}
impl join::Usecase for MemberJoinInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: join::Input) -> Result<join::Output> {
        tracing::trace!("input - {:?}", data);

        require_actor(state, self.mode)?;
        if let Some(User { email, .. }) = &state.session {
            return Err(ActionError::LoggedIn {
                email: email.clone(),
            });
        }

        let member = Actor::guest().as_member();

        state.joined = !state.joined;

        match state.joined {
            true => {
                state.add_member_front(member.clone());
            },
            false => {
                let registered = state.users.iter().any(|u| u.name == member.name);
                if !registered {
                    state.members.retain(|m| m.name != member.name);
                }
            },
        }

        join::Output {
            joined: state.joined,
            member,
        }
        .also_(|o| tracing::trace!("output - {:?}", o))
        .let_(Ok)
    }
}

pub struct MemberSignUpInteractor;
impl sign_up::Usecase for MemberSignUpInteractor {
    #[tracing::instrument(skip(self, state, data), fields(email = %data.email))]
    fn handle(&self, state: &mut BoardState, data: sign_up::Input) -> Result<sign_up::Output> {
        let sign_up::Input {
            email,
            password,
            name,
        } = data;

        let email = require_text(&email, Field::Email)?;
        if password.is_empty() {
            return Err(ActionError::EmptyRequiredField {
                field: Field::Password,
            });
        }
        let name = require_text(&name, Field::Name)?;

        if state.find_user(&email).is_some() {
            return Err(ActionError::DuplicateIdentifier { email });
        }

        let new_user = User {
            initials: initials_of(&name),
            email,
            password,
            name,
        };

        state.users.push(new_user.clone());
        state.session = Some(new_user.clone());
        state.add_member_front(Member::new(new_user.name.clone(), new_user.initials.clone()));

        tracing::debug!("registered - {}", new_user.email);

        sign_up::Output { user: new_user }.let_(Ok)
    }
}

pub struct MemberLogInInteractor;
impl log_in::Usecase for MemberLogInInteractor {
    #[tracing::instrument(skip(self, state, data), fields(email = %data.email))]
    fn handle(&self, state: &mut BoardState, data: log_in::Input) -> Result<log_in::Output> {
        let log_in::Input { email, password } = data;

        let email = require_text(&email, Field::Email)?;
        if password.is_empty() {
            return Err(ActionError::EmptyRequiredField {
                field: Field::Password,
            });
        }

        let user = state
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(ActionError::InvalidCredentials)?;

        state.session = Some(user.clone());

        log_in::Output { user }.let_(Ok)
    }
}

pub struct MemberLogOutInteractor;
impl log_out::Usecase for MemberLogOutInteractor {
    #[tracing::instrument(skip(self, state))]
    fn handle(&self, state: &mut BoardState, data: log_out::Input) -> Result<log_out::Output> {
        tracing::trace!("input - {:?}", data);

        log_out::Output {
            user: state.session.take(),
        }
        .let_(Ok)
    }
}
