usecase! {
    join : {} => {
        pub joined: bool,
        pub member: entities::Member,
    }
}

usecase! {
    sign_up : {
        pub email: String,
        pub password: String,
        pub name: String,
    } => {
        pub user: entities::User,
    }
}

usecase! {
    log_in : {
        pub email: String,
        pub password: String,
    } => {
        pub user: entities::User,
    }
}

usecase! {
    log_out : {} => {
        pub user: Option<entities::User>,
    }
}
