mod artwork;
