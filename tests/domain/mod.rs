mod audio_format_test;
