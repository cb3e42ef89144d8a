pub mod gitlab_hook;
