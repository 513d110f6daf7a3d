use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message and print the reply
    Send {
        message: String,
    },

    /// Interactive chat: one message per line, `/quit` or EOF to leave
    Chat,
}
