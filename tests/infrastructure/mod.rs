mod runpod_client_test;
mod ytdlp_acquirer_test;
