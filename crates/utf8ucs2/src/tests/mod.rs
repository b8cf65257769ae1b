mod codec_table;
