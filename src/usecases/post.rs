usecase! {
    create : {
        pub title: String,
        pub body: String,
        pub tags: String,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    elect : {
        pub title: String,
        pub body: String,
        pub tags: String,
        pub options: Vec<String>,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    vote : {
        pub post_id: entities::PostId,
        pub option: String,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    like : {
        pub post_id: entities::PostId,
    } => {
        pub post: entities::Post,
        pub liked: bool,
    }
}

usecase! {
    comment : {
        pub post_id: entities::PostId,
        pub text: String,
    } => {
        pub post: entities::Post,
        pub comment: entities::Comment,
    }
}
