mod ytdlp_acquirer;

pub use ytdlp_acquirer::YtDlpAcquirer;
