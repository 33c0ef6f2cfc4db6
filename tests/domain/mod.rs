mod media_source_test;
